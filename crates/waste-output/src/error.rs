//! Error types for waste-output.
//!
//! Creating the output directory and flushing files fail with `Io`; row
//! serialisation in the CSV backend fails with `Csv`; schema setup and
//! inserts in the SQLite backend fail with `Sqlite`.  The observer keeps the
//! first of these for `take_error`.

use thiserror::Error;

/// Errors raised while writing the event log, zone levels or summary.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
