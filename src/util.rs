//! Small formatting helpers shared by the player and overlays.

/// Placeholder cover shown when a song has no artwork.
pub const FALLBACK_COVER_URL: &str =
    "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=300&q=80";

/// Placeholder avatar for artists without an image.
pub const FALLBACK_ARTIST_URL: &str =
    "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=300&q=80";

/// Seconds to a `m:ss` label. Anything unusable (NaN, infinite stream
/// durations, negatives) renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Countdown label for the study timer, `mm:ss`.
pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_renders_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(7.9), "0:07");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(600.0), "10:00");
    }

    #[test]
    fn format_time_guards_non_finite_durations() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn format_countdown_pads_both_fields() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(61), "01:01");
        assert_eq!(format_countdown(20 * 60), "20:00");
    }
}
