use crate::form::ControlId;

/// Failures while wiring the estimator to a document
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("document has no control with id `{0}`")]
    MissingControl(ControlId),
}

/// Failures while rendering a completion timestamp
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FormatError {
    #[error("completion time is {0} seconds away, outside the representable range")]
    OutOfRange(f64),
    #[error("invalid date pattern `{0}`")]
    InvalidPattern(String),
}
