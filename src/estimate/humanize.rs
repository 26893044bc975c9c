//! Relative duration text
//!
//! Renders a span as its single most significant unit, the way most
//! date libraries phrase "in 14 minutes" without the "in".

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

// Rounded-count thresholds. A count below the threshold stays in that unit.
const SECONDS_THRESHOLD: f64 = 45.0;
const MINUTES_THRESHOLD: f64 = 45.0;
const HOURS_THRESHOLD: f64 = 22.0;
const DAYS_THRESHOLD: f64 = 26.0;
const MONTHS_THRESHOLD: f64 = 11.0;

/// 400 Gregorian years hold 4800 months and 146097 days.
fn days_to_months(days: f64) -> f64 {
    days * 4_800.0 / 146_097.0
}

/// Humanize a duration in seconds.
///
/// Negative spans are rendered by magnitude. Non-finite input compares false
/// against every threshold and lands in the years branch (`"inf years"`,
/// `"NaN years"`).
pub fn humanize_seconds(seconds: f64) -> String {
    let span = seconds.abs();
    let months_exact = days_to_months(span / SECONDS_PER_DAY);

    let secs = span.round();
    let minutes = (span / SECONDS_PER_MINUTE).round();
    let hours = (span / SECONDS_PER_HOUR).round();
    let days = (span / SECONDS_PER_DAY).round();
    let months = months_exact.round();
    let years = (months_exact / 12.0).round();

    if secs < SECONDS_THRESHOLD {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < MINUTES_THRESHOLD {
        format!("{} minutes", minutes)
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < HOURS_THRESHOLD {
        format!("{} hours", hours)
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < DAYS_THRESHOLD {
        format!("{} days", days)
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < MONTHS_THRESHOLD {
        format!("{} months", months)
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_few_seconds() {
        assert_eq!(humanize_seconds(0.0), "a few seconds");
        assert_eq!(humanize_seconds(1.0), "a few seconds");
        assert_eq!(humanize_seconds(44.0), "a few seconds");
        assert_eq!(humanize_seconds(44.4), "a few seconds");
    }

    #[test]
    fn test_minute_boundaries() {
        assert_eq!(humanize_seconds(44.5), "a minute");
        assert_eq!(humanize_seconds(45.0), "a minute");
        assert_eq!(humanize_seconds(89.0), "a minute");
        assert_eq!(humanize_seconds(90.0), "2 minutes");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(humanize_seconds(819.2), "14 minutes");
        assert_eq!(humanize_seconds(44.0 * 60.0), "44 minutes");
    }

    #[test]
    fn test_hour_boundaries() {
        assert_eq!(humanize_seconds(45.0 * 60.0), "an hour");
        assert_eq!(humanize_seconds(89.0 * 60.0), "an hour");
        assert_eq!(humanize_seconds(90.0 * 60.0), "2 hours");
        assert_eq!(humanize_seconds(21.0 * 3600.0), "21 hours");
    }

    #[test]
    fn test_day_boundaries() {
        assert_eq!(humanize_seconds(22.0 * 3600.0), "a day");
        assert_eq!(humanize_seconds(35.0 * 3600.0), "a day");
        assert_eq!(humanize_seconds(36.0 * 3600.0), "2 days");
        assert_eq!(humanize_seconds(25.0 * 86_400.0), "25 days");
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(humanize_seconds(26.0 * 86_400.0), "a month");
        assert_eq!(humanize_seconds(45.0 * 86_400.0), "a month");
        assert_eq!(humanize_seconds(46.0 * 86_400.0), "2 months");
        assert_eq!(humanize_seconds(300.0 * 86_400.0), "10 months");
    }

    #[test]
    fn test_year_boundaries() {
        assert_eq!(humanize_seconds(320.0 * 86_400.0), "a year");
        assert_eq!(humanize_seconds(547.0 * 86_400.0), "a year");
        assert_eq!(humanize_seconds(548.0 * 86_400.0), "2 years");
        assert_eq!(humanize_seconds(10.0 * 365.25 * 86_400.0), "10 years");
    }

    #[test]
    fn test_negative_uses_magnitude() {
        assert_eq!(humanize_seconds(-819.2), humanize_seconds(819.2));
        assert_eq!(humanize_seconds(-7200.0), "2 hours");
    }

    #[test]
    fn test_non_finite_falls_through_to_years() {
        assert_eq!(humanize_seconds(f64::INFINITY), "inf years");
        assert_eq!(humanize_seconds(f64::NAN), "NaN years");
    }
}
