//! Wall-clock formatting backed by chrono

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeDelta};

use super::{humanize::humanize_seconds, EstimateFormatter};
use crate::error::FormatError;

/// Long date with month name, day, year and 12-hour time,
/// e.g. `October 16, 2026 3:13 PM`
pub const DEFAULT_DATE_PATTERN: &str = "%B %-d, %Y %-I:%M %p";

/// Formats estimates against the local clock
#[derive(Debug, Clone)]
pub struct ChronoFormatter {
    pattern: String,
    fixed_now: Option<DateTime<Local>>,
}

impl Default for ChronoFormatter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_PATTERN.to_string(),
            fixed_now: None,
        }
    }
}

impl ChronoFormatter {
    /// Create a formatter with a custom strftime pattern.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidPattern`] if chrono cannot parse the pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self, FormatError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(FormatError::InvalidPattern(pattern.to_string()));
        }
        Ok(Self {
            pattern: pattern.to_string(),
            fixed_now: None,
        })
    }

    /// Builder method: pin "now" to a fixed instant
    #[cfg(test)]
    pub fn with_now(mut self, now: DateTime<Local>) -> Self {
        self.fixed_now = Some(now);
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn now(&self) -> DateTime<Local> {
        self.fixed_now.unwrap_or_else(Local::now)
    }
}

impl EstimateFormatter for ChronoFormatter {
    fn humanize_duration(&self, seconds: f64) -> String {
        humanize_seconds(seconds)
    }

    fn format_future_timestamp(&self, seconds: f64) -> Result<String, FormatError> {
        // Millisecond precision; f64 -> i64 casts saturate, so bound first
        let millis = (seconds * 1000.0).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return Err(FormatError::OutOfRange(seconds));
        }

        let at = TimeDelta::try_milliseconds(millis as i64)
            .and_then(|delta| self.now().checked_add_signed(delta))
            .ok_or(FormatError::OutOfRange(seconds))?;

        let mut out = String::new();
        write!(out, "{}", at.format(&self.pattern))
            .map_err(|_| FormatError::InvalidPattern(self.pattern.clone()))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> ChronoFormatter {
        let now = Local
            .with_ymd_and_hms(2026, 10, 16, 15, 0, 0)
            .single()
            .unwrap();
        ChronoFormatter::default().with_now(now)
    }

    #[test]
    fn test_default_pattern() {
        assert_eq!(ChronoFormatter::default().pattern(), DEFAULT_DATE_PATTERN);
    }

    #[test]
    fn test_long_date_format() {
        let formatter = fixed();
        assert_eq!(
            formatter.format_future_timestamp(819.2).unwrap(),
            "October 16, 2026 3:13 PM"
        );
    }

    #[test]
    fn test_zero_offset_is_now() {
        let formatter = fixed();
        assert_eq!(
            formatter.format_future_timestamp(0.0).unwrap(),
            "October 16, 2026 3:00 PM"
        );
    }

    #[test]
    fn test_crosses_into_next_day() {
        let formatter = fixed();
        // 10 hours later
        assert_eq!(
            formatter.format_future_timestamp(36_000.0).unwrap(),
            "October 17, 2026 1:00 AM"
        );
    }

    #[test]
    fn test_custom_pattern() {
        let formatter = ChronoFormatter::with_pattern("%Y-%m-%d %H:%M")
            .unwrap()
            .with_now(fixed().now());
        assert_eq!(
            formatter.format_future_timestamp(3600.0).unwrap(),
            "2026-10-16 16:00"
        );
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = ChronoFormatter::with_pattern("%Q").unwrap_err();
        assert_eq!(err, FormatError::InvalidPattern("%Q".to_string()));
    }

    #[test]
    fn test_infinite_offset_out_of_range() {
        let formatter = fixed();
        assert_eq!(
            formatter.format_future_timestamp(f64::INFINITY),
            Err(FormatError::OutOfRange(f64::INFINITY))
        );
    }

    #[test]
    fn test_huge_offset_out_of_range() {
        let formatter = fixed();
        // ~3 million years
        let seconds = 1.0e14;
        assert_eq!(
            formatter.format_future_timestamp(seconds),
            Err(FormatError::OutOfRange(seconds))
        );
    }

    #[test]
    fn test_humanize_delegates() {
        assert_eq!(fixed().humanize_duration(819.2), "14 minutes");
    }
}
