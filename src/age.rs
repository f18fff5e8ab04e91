//! Elapsed-time captions
//!
//! Turns an item's entry timestamp into the short "3h ago" / "2d ago"
//! text shown on each card.

use chrono::{Duration, NaiveDateTime};

/// Format how long an item has been in the fridge.
///
/// Under a full day the caption counts whole hours, after that whole
/// days. Timestamps in the future (clock changes, hand-edited files)
/// clamp to "0h ago".
pub fn format_age(added_at: NaiveDateTime, now: NaiveDateTime) -> String {
    let delta = now - added_at;
    if delta < Duration::zero() {
        return "0h ago".to_string();
    }

    if delta.num_hours() < 24 {
        format!("{}h ago", delta.num_hours())
    } else {
        format!("{}d ago", delta.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_zero_elapsed() {
        let t = at(12, 0);
        assert_eq!(format_age(t, t), "0h ago");
    }

    #[test]
    fn test_hours_under_a_day() {
        let now = at(12, 0);
        assert_eq!(format_age(at(7, 0), now), "5h ago");
        assert_eq!(format_age(at(11, 59), now), "0h ago");
    }

    #[test]
    fn test_partial_hours_round_down() {
        let now = at(12, 30);
        assert_eq!(format_age(at(9, 0), now), "3h ago");
    }

    #[test]
    fn test_days_at_and_past_24_hours() {
        let now = at(12, 0) + Duration::hours(26);
        assert_eq!(format_age(at(12, 0), now), "1d ago");

        let now = at(12, 0) + Duration::hours(24);
        assert_eq!(format_age(at(12, 0), now), "1d ago");

        let now = at(12, 0) + Duration::days(3);
        assert_eq!(format_age(at(12, 0), now), "3d ago");
    }

    #[test]
    fn test_future_timestamp_clamps() {
        let now = at(12, 0);
        assert_eq!(format_age(at(15, 0), now), "0h ago");
    }
}
