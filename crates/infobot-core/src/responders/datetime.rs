//! Date/time responder. Pure function of the clock; no external calls.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub(super) fn respond() -> String {
    compose(Utc::now())
}

pub(super) fn compose(now: DateTime<Utc>) -> String {
    let days_in_year = NaiveDate::from_ymd_opt(now.year(), 12, 31)
        .map(|d| d.ordinal())
        .unwrap_or(365);

    format!(
        "📅 *Date and Time Information*\n\n\
         • Current Date: {date}\n\
         • Current Time: {time}\n\
         • Day of Week: {weekday}\n\
         • Week Number: {week}\n\
         • Timezone: UTC\n\n\
         *Calendar:*\n\
         Today is day {ordinal} of {days_in_year} in {year}",
        date = now.format("%Y-%m-%d"),
        time = now.format("%H:%M:%S"),
        weekday = now.format("%A"),
        week = now.iso_week().week(),
        ordinal = now.ordinal(),
        year = now.year(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn known_timestamp_renders_all_fields() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 14, 30, 5).unwrap();
        let text = compose(now);

        assert!(text.contains("Current Date: 2026-08-23"));
        assert!(text.contains("Current Time: 14:30:05"));
        assert!(text.contains("Day of Week: Sunday"));
        assert!(text.contains("Timezone: UTC"));
        assert!(text.contains("Today is day 235 of 365 in 2026"));
    }

    #[test]
    fn weekday_matches_the_rendered_date() {
        // Cross-field consistency: the weekday name must belong to the date
        // shown in the same reply, for any timestamp.
        for (y, m, d) in [(2024, 2, 29), (2025, 1, 1), (2026, 8, 23), (2000, 12, 31)] {
            let now = Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
            let text = compose(now);
            assert!(text.contains(&format!("Current Date: {}", now.format("%Y-%m-%d"))));
            assert!(text.contains(&format!("Day of Week: {}", now.format("%A"))));
        }
    }

    #[test]
    fn leap_year_counts_366_days() {
        let now = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
        let text = compose(now);
        assert!(text.contains("Today is day 60 of 366 in 2024"));
    }
}
