//! Errors raised while reading calendar values.

use thiserror::Error;

/// Errors of the date and shared-type layer.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A date, time or date-time string is not in its canonical form.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A value outside the accepted set, such as an unknown view mode.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Well-formed values that contradict each other, such as a range ending
    /// before it starts.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Application state the request pipeline injects was never registered.
    #[error("Calendar state unavailable: {0}")]
    StateUnavailable(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
