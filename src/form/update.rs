//! Snapshot -> canonical units -> estimate -> outputs

use std::fmt;

use super::{FormPort, Snapshot};
use crate::estimate::{estimate, ChronoFormatter, Estimate, EstimateFormatter};
use crate::units::{size_factor, speed_factor};

/// Parse the leading base-10 integer of `text`.
///
/// Leading whitespace and a single sign are allowed; parsing stops at the
/// first non-digit. `None` if no digit was read.
pub fn parse_leading_int(text: &str) -> Option<f64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits: Vec<f64> = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(f64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    // Accumulate in f64 so long inputs grow instead of overflowing
    let magnitude = digits.iter().fold(0.0, |acc, d| acc * 10.0 + d);
    Some(if negative { -magnitude } else { magnitude })
}

/// `value` scaled by `factor`, NaN if either is missing
fn scale(value: Option<f64>, factor: Option<f64>) -> f64 {
    match (value, factor) {
        (Some(value), Some(factor)) => value * factor,
        _ => f64::NAN,
    }
}

/// Inputs converted to bytes and bits per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub bytes: f64,
    pub bits_per_second: f64,
}

impl Measurement {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            bytes: scale(
                parse_leading_int(&snapshot.size_value),
                size_factor(&snapshot.size_unit),
            ),
            bits_per_second: scale(
                parse_leading_int(&snapshot.speed_value),
                speed_factor(&snapshot.speed_unit),
            ),
        }
    }
}

/// Recomputes the estimate from the current inputs
pub struct UpdateHandler {
    formatter: Box<dyn EstimateFormatter>,
}

impl fmt::Debug for UpdateHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateHandler").finish_non_exhaustive()
    }
}

impl Default for UpdateHandler {
    fn default() -> Self {
        Self::new(ChronoFormatter::default())
    }
}

impl UpdateHandler {
    pub fn new(formatter: impl EstimateFormatter + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
        }
    }

    /// Estimate for a snapshot, without touching any outputs
    pub fn compute(&self, snapshot: &Snapshot) -> Estimate {
        let measurement = Measurement::from_snapshot(snapshot);
        tracing::debug!(
            bytes = measurement.bytes,
            bits_per_second = measurement.bits_per_second,
            "Recomputing estimate"
        );
        estimate(
            measurement.bytes,
            measurement.bits_per_second,
            self.formatter.as_ref(),
        )
    }

    /// Read the inputs, estimate, write both outputs
    pub fn update(&self, port: &mut dyn FormPort) {
        let result = self.compute(&port.read_inputs());
        if !result.is_available() {
            tracing::trace!("Inputs not measurable");
        }
        port.write_outputs(&result.time, &result.date);
    }
}
