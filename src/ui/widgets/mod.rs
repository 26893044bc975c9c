//! Reusable widgets

pub mod field;
pub mod readout;
