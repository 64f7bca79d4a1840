//! Pure playback-queue logic.
//!
//! The active queue is whatever song list the user is currently looking
//! at (full catalog, search results, a playlist, a study-mode genre
//! fetch); next/previous derive the new current song from the current
//! song's position in that list, wrapping circularly. Keeping this free
//! of signals makes the transport math testable on its own.

use crate::api::models::Song;

/// Repeat cycles Off -> All -> One -> Off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatMode {
    #[default]
    Off,
    All,
    One,
}

impl RepeatMode {
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

fn position_of(queue: &[Song], current: &Song) -> Option<usize> {
    queue.iter().position(|s| s.id == current.id)
}

/// The song after `current`, wrapping to the front. `None` when the queue
/// is empty or the current song is not a member of it.
pub fn next_song(queue: &[Song], current: Option<&Song>) -> Option<Song> {
    let current = current?;
    if queue.is_empty() {
        return None;
    }
    let index = position_of(queue, current)?;
    queue.get((index + 1) % queue.len()).cloned()
}

/// The song before `current`, wrapping to the back.
pub fn previous_song(queue: &[Song], current: Option<&Song>) -> Option<Song> {
    let current = current?;
    if queue.is_empty() {
        return None;
    }
    let index = position_of(queue, current)?;
    let previous = if index == 0 { queue.len() - 1 } else { index - 1 };
    queue.get(previous).cloned()
}

/// Map a 0..len-1 roll onto a queue position that is not `current`, so a
/// shuffled advance never lands on the playing song (unless the queue has
/// a single entry).
pub fn pick_other_index(len: usize, current: usize, roll: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let candidate = roll % (len - 1);
    if candidate >= current {
        candidate + 1
    } else {
        candidate
    }
}

/// Random queue position for shuffle mode.
pub fn shuffled_next(queue: &[Song], current: Option<&Song>) -> Option<Song> {
    let current = current?;
    if queue.is_empty() {
        return None;
    }
    let index = position_of(queue, current)?;
    let target = pick_other_index(queue.len(), index, random_roll(queue.len()));
    queue.get(target).cloned()
}

/// Song to start when `current` finishes playing. Repeat-one is the
/// caller's rewind; every other mode advances, wrapping at the tail like
/// a manual "next" press.
pub fn ended_next(queue: &[Song], current: Option<&Song>, shuffle: bool) -> Option<Song> {
    if shuffle {
        shuffled_next(queue, current)
    } else {
        next_song(queue, current)
    }
}

#[cfg(target_arch = "wasm32")]
fn random_roll(len: usize) -> usize {
    (js_sys::Math::random() * len as f64) as usize
}

#[cfg(not(target_arch = "wasm32"))]
fn random_roll(len: usize) -> usize {
    use rand::Rng;
    rand::thread_rng().gen_range(0..len.max(1))
}

/// One optimistic like flip in flight.
///
/// `confirmed` is the last backend-acknowledged value; the flip shown in
/// the UI is `!confirmed`. Reverting a failed request means restoring
/// `confirmed`, never flipping again, so overlapping failures cannot
/// desync the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeUpdate {
    pub song_id: i64,
    pub confirmed: bool,
}

impl LikeUpdate {
    pub fn begin(song_id: i64, confirmed: bool) -> Self {
        Self { song_id, confirmed }
    }

    pub fn optimistic(&self) -> bool {
        !self.confirmed
    }
}

/// Set the like flag for one song across a tracked list.
pub fn apply_like(songs: &mut [Song], song_id: i64, liked: bool) {
    for song in songs.iter_mut() {
        if song.id == song_id {
            song.is_liked = liked;
        }
    }
}

/// Absolute seek position for a 0.0..=1.0 fraction of the track. `None`
/// when the duration is unknown (stream headers not loaded yet), so a
/// click on the progress track before metadata arrives does nothing.
pub fn seek_target(fraction: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    Some(fraction.clamp(0.0, 1.0) * duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: i64) -> Song {
        Song {
            id,
            name: format!("song-{id}"),
            ..Default::default()
        }
    }

    fn queue(ids: &[i64]) -> Vec<Song> {
        ids.iter().copied().map(song).collect()
    }

    #[test]
    fn next_and_previous_are_circular_inverses() {
        let q = queue(&[1, 2, 3, 4]);
        for s in &q {
            let forward = next_song(&q, Some(s)).unwrap();
            let back = previous_song(&q, Some(&forward)).unwrap();
            assert_eq!(back.id, s.id);

            let backward = previous_song(&q, Some(s)).unwrap();
            let there = next_song(&q, Some(&backward)).unwrap();
            assert_eq!(there.id, s.id);
        }
    }

    #[test]
    fn next_wraps_to_front_and_previous_to_back() {
        let q = queue(&[10, 20, 30]);
        assert_eq!(next_song(&q, Some(&q[2])).unwrap().id, 10);
        assert_eq!(previous_song(&q, Some(&q[0])).unwrap().id, 30);
    }

    #[test]
    fn single_entry_queue_returns_itself() {
        let q = queue(&[5]);
        assert_eq!(next_song(&q, Some(&q[0])).unwrap().id, 5);
        assert_eq!(previous_song(&q, Some(&q[0])).unwrap().id, 5);
    }

    #[test]
    fn missing_member_or_empty_queue_is_a_no_op() {
        let q = queue(&[1, 2]);
        let outsider = song(99);
        assert!(next_song(&q, Some(&outsider)).is_none());
        assert!(previous_song(&q, Some(&outsider)).is_none());
        assert!(next_song(&[], Some(&q[0])).is_none());
        assert!(next_song(&q, None).is_none());
    }

    #[test]
    fn pick_other_index_never_hits_current() {
        for len in 2..6 {
            for current in 0..len {
                for roll in 0..len * 3 {
                    let picked = pick_other_index(len, current, roll);
                    assert_ne!(picked, current);
                    assert!(picked < len);
                }
            }
        }
        assert_eq!(pick_other_index(1, 0, 7), 0);
    }

    #[test]
    fn ended_track_at_the_tail_wraps_to_the_front() {
        let q = queue(&[1, 2, 3]);
        assert_eq!(ended_next(&q, Some(&q[2]), false).unwrap().id, 1);
        assert_eq!(ended_next(&q, Some(&q[0]), false).unwrap().id, 2);
        assert!(ended_next(&[], Some(&q[0]), false).is_none());
        assert!(ended_next(&q, None, false).is_none());
    }

    #[test]
    fn shuffled_ended_advance_stays_in_queue_and_off_current() {
        let q = queue(&[1, 2, 3, 4]);
        for _ in 0..20 {
            let picked = ended_next(&q, Some(&q[3]), true).unwrap();
            assert_ne!(picked.id, q[3].id);
            assert!(q.iter().any(|s| s.id == picked.id));
        }
    }

    #[test]
    fn repeat_mode_cycles_off_all_one() {
        assert_eq!(RepeatMode::Off.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::Off);
    }

    #[test]
    fn double_toggle_round_trip_restores_flag() {
        let mut catalog = queue(&[1, 2, 3]);
        let original = catalog[1].is_liked;

        let first = LikeUpdate::begin(2, catalog[1].is_liked);
        apply_like(&mut catalog, 2, first.optimistic());
        // backend confirms; confirmed value is now the optimistic one
        let second = LikeUpdate::begin(2, first.optimistic());
        apply_like(&mut catalog, 2, second.optimistic());

        assert_eq!(catalog[1].is_liked, original);
        assert_eq!(catalog[0].is_liked, false);
    }

    #[test]
    fn failed_toggle_restores_confirmed_value() {
        let mut catalog = queue(&[1, 2]);
        catalog[0].is_liked = true;

        let update = LikeUpdate::begin(1, true);
        apply_like(&mut catalog, 1, update.optimistic());
        assert!(!catalog[0].is_liked);

        // request failed: restore the confirmed value, do not flip again
        apply_like(&mut catalog, 1, update.confirmed);
        assert!(catalog[0].is_liked);

        // a second failure handler doing the same restore is harmless
        apply_like(&mut catalog, 1, update.confirmed);
        assert!(catalog[0].is_liked);
    }

    #[test]
    fn seek_requires_finite_positive_duration() {
        assert_eq!(seek_target(0.5, 200.0), Some(100.0));
        assert_eq!(seek_target(1.5, 200.0), Some(200.0));
        assert_eq!(seek_target(-0.5, 200.0), Some(0.0));
        assert!(seek_target(0.5, f64::NAN).is_none());
        assert!(seek_target(0.5, f64::INFINITY).is_none());
        assert!(seek_target(0.5, 0.0).is_none());
    }
}
