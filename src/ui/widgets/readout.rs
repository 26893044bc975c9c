//! Canonical-unit readouts shown under each input row

use crate::estimate::is_measurable;

/// Format a byte count as human readable, `None` if it isn't measurable
pub fn format_bytes(bytes: f64) -> Option<String> {
    is_measurable(bytes).then(|| humansize::format_size(bytes.round() as u64, humansize::BINARY))
}

/// Format bits per second as bytes per second, `None` if it isn't measurable
pub fn format_bit_rate(bits_per_second: f64) -> Option<String> {
    if !is_measurable(bits_per_second) {
        return None;
    }
    let bytes_per_second = (bits_per_second / 8.0).round() as u64;
    Some(format!(
        "{}/s",
        humansize::format_size(bytes_per_second, humansize::BINARY)
    ))
}
