//! Display label helpers for timestamps.
//!
//! # Responsibility
//! - Produce the status-line clock label and the note-list day label.
//!
//! # Invariants
//! - Helpers are pure over their inputs; callers pick the zone before
//!   formatting.

use chrono::{DateTime, Utc};

/// 12-hour clock label, e.g. `03:04 PM`, used for "saved at" displays.
pub fn clock_label(at: DateTime<Utc>) -> String {
    at.format("%I:%M %p").to_string()
}

/// Compact day label for note lists: clock time today, `Yesterday` for one
/// day back, `N days ago` inside a week, ISO date beyond that.
pub fn day_label(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now.date_naive() - at.date_naive()).num_days();
    match days {
        i64::MIN..=0 => clock_label(at),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        _ => at.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{clock_label, day_label};
    use chrono::{TimeZone, Utc};

    #[test]
    fn clock_label_is_twelve_hour() {
        let afternoon = Utc.with_ymd_and_hms(2026, 8, 7, 15, 4, 0).unwrap();
        assert_eq!(clock_label(afternoon), "03:04 PM");

        let morning = Utc.with_ymd_and_hms(2026, 8, 7, 9, 30, 0).unwrap();
        assert_eq!(clock_label(morning), "09:30 AM");
    }

    #[test]
    fn day_label_covers_all_ranges() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 18, 0, 0).unwrap();

        let today = Utc.with_ymd_and_hms(2026, 8, 7, 15, 4, 0).unwrap();
        assert_eq!(day_label(today, now), "03:04 PM");

        let yesterday = Utc.with_ymd_and_hms(2026, 8, 6, 23, 0, 0).unwrap();
        assert_eq!(day_label(yesterday, now), "Yesterday");

        let this_week = Utc.with_ymd_and_hms(2026, 8, 3, 12, 0, 0).unwrap();
        assert_eq!(day_label(this_week, now), "4 days ago");

        let older = Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap();
        assert_eq!(day_label(older, now), "2026-07-01");
    }
}
