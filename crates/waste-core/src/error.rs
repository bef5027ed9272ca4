//! Configuration-level error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while validating or loading simulation configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid {what} range: min {min} > max {max}")]
    InvalidRange {
        what: &'static str,
        min:  u64,
        max:  u64,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for configuration code.
pub type CoreResult<T> = Result<T, CoreError>;
