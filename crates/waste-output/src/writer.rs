//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventLogRow, OutputResult, SummaryRow, ZoneLevelRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are returned to the caller; [`SimOutputObserver`](crate::SimOutputObserver)
/// keeps the first one for [`take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    fn write_events(&mut self, rows: &[EventLogRow]) -> OutputResult<()>;

    fn write_zone_levels(&mut self, rows: &[ZoneLevelRow]) -> OutputResult<()>;

    /// Write the end-of-run summary.  Called once.
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
