//! Download time estimation
//!
//! Pure arithmetic over canonical units (bytes, bits per second). Text
//! rendering is delegated to an [`EstimateFormatter`] so the arithmetic can
//! be tested without a clock.

mod clock;
pub mod humanize;

pub use clock::{ChronoFormatter, DEFAULT_DATE_PATTERN};

use serde::Serialize;

use crate::error::FormatError;

/// Shown in place of both outputs when the inputs can't be estimated
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown as the date when the completion instant can't be represented
pub const INVALID_DATE: &str = "Invalid date";

/// Renders the two halves of an estimate
pub trait EstimateFormatter {
    /// Approximate, single-unit duration text ("14 minutes")
    fn humanize_duration(&self, seconds: f64) -> String;

    /// Absolute time `seconds` from now
    fn format_future_timestamp(&self, seconds: f64) -> Result<String, FormatError>;
}

/// Humanized duration and completion date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub time: String,
    pub date: String,
}

impl Estimate {
    pub fn not_available() -> Self {
        Self {
            time: NOT_AVAILABLE.to_string(),
            date: NOT_AVAILABLE.to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        *self != Self::not_available()
    }
}

/// A canonical value is usable only if it is a finite, strictly positive number
pub fn is_measurable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Seconds to move `bytes` at `bits_per_second`
pub fn transfer_seconds(bytes: f64, bits_per_second: f64) -> f64 {
    bytes * 8.0 / bits_per_second
}

/// Estimate how long a download of `bytes` takes at `bits_per_second`.
///
/// Returns the N/A pair when either input is not measurable (zero, negative,
/// NaN or infinite). If only the completion date can't be represented, the
/// date alone becomes [`INVALID_DATE`].
pub fn estimate<F: EstimateFormatter + ?Sized>(
    bytes: f64,
    bits_per_second: f64,
    formatter: &F,
) -> Estimate {
    if !is_measurable(bytes) || !is_measurable(bits_per_second) {
        return Estimate::not_available();
    }

    let seconds = transfer_seconds(bytes, bits_per_second);
    let time = formatter.humanize_duration(seconds);
    let date = match formatter.format_future_timestamp(seconds) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!("Cannot render completion date: {}", e);
            INVALID_DATE.to_string()
        }
    };

    Estimate { time, date }
}
