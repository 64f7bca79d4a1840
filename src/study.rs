//! Study-mode countdown: a two-phase focus/break timer that also swaps
//! the active song queue. The machine itself is pure; the app shell
//! drives `tick` once per second and reacts to phase flips by refetching
//! the queue (STUDY genre while focusing, full catalog otherwise).

/// Which catalog the player should be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueMode {
    /// Genre-filtered study playlist.
    Study,
    /// The regular unfiltered catalog.
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyPhase {
    Study,
    Break,
}

impl StudyPhase {
    pub fn flipped(self) -> Self {
        match self {
            StudyPhase::Study => StudyPhase::Break,
            StudyPhase::Break => StudyPhase::Study,
        }
    }

    pub fn queue_mode(self) -> QueueMode {
        match self {
            StudyPhase::Study => QueueMode::Study,
            StudyPhase::Break => QueueMode::Regular,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StudyPhase::Study => "Focus Time",
            StudyPhase::Break => "Break Time",
        }
    }
}

/// Session presets offered by the overlay, `(study, break)` in minutes.
pub const SESSION_PRESETS: [(u32, u32); 4] = [(2, 1), (20, 5), (30, 10), (60, 15)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyState {
    pub is_active: bool,
    pub phase: StudyPhase,
    pub time_left: u32,
    pub study_duration: u32,
    pub break_duration: u32,
}

impl Default for StudyState {
    fn default() -> Self {
        Self {
            is_active: false,
            phase: StudyPhase::Study,
            time_left: 0,
            study_duration: 0,
            break_duration: 0,
        }
    }
}

impl StudyState {
    /// Begin a session. Always starts in the study phase.
    pub fn start(study_minutes: u32, break_minutes: u32) -> Self {
        Self {
            is_active: true,
            phase: StudyPhase::Study,
            time_left: study_minutes * 60,
            study_duration: study_minutes * 60,
            break_duration: break_minutes * 60,
        }
    }

    /// Advance one second. Returns the new phase when the countdown hit
    /// zero and flipped, so the caller can swap the song queue.
    pub fn tick(&mut self) -> Option<StudyPhase> {
        if !self.is_active || self.time_left == 0 {
            return None;
        }
        self.time_left -= 1;
        if self.time_left > 0 {
            return None;
        }
        self.phase = self.phase.flipped();
        self.time_left = match self.phase {
            StudyPhase::Study => self.study_duration,
            StudyPhase::Break => self.break_duration,
        };
        Some(self.phase)
    }

    /// "Give up": deactivate and go back to the regular catalog.
    pub fn give_up(&mut self) {
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_sets_study_phase_and_full_countdown() {
        let state = StudyState::start(1, 1);
        assert!(state.is_active);
        assert_eq!(state.phase, StudyPhase::Study);
        assert_eq!(state.time_left, 60);
        assert_eq!(state.break_duration, 60);
    }

    #[test]
    fn sixty_ticks_flip_study_to_break() {
        let mut state = StudyState::start(1, 1);
        for _ in 0..59 {
            assert_eq!(state.tick(), None);
        }
        assert_eq!(state.tick(), Some(StudyPhase::Break));
        assert_eq!(state.phase, StudyPhase::Break);
        assert_eq!(state.time_left, 60);
    }

    #[test]
    fn break_flips_back_to_study_with_study_duration() {
        let mut state = StudyState::start(2, 1);
        // run out the study phase
        for _ in 0..(2 * 60 - 1) {
            state.tick();
        }
        assert_eq!(state.tick(), Some(StudyPhase::Break));
        // run out the break phase
        for _ in 0..59 {
            state.tick();
        }
        assert_eq!(state.tick(), Some(StudyPhase::Study));
        assert_eq!(state.time_left, 2 * 60);
    }

    #[test]
    fn inactive_state_never_ticks() {
        let mut state = StudyState::default();
        assert_eq!(state.tick(), None);
        assert_eq!(state.time_left, 0);
    }

    #[test]
    fn give_up_deactivates_and_restores_regular_queue() {
        let mut state = StudyState::start(20, 5);
        state.give_up();
        assert!(!state.is_active);
        assert_eq!(state.tick(), None);
        assert_eq!(QueueMode::Regular, StudyPhase::Break.queue_mode());
        assert_eq!(QueueMode::Study, StudyPhase::Study.queue_mode());
    }
}
