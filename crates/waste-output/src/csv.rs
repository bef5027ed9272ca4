//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `events.csv`
//! - `zone_levels.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventLogRow, OutputResult, SummaryRow, ZoneLevelRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    levels:   Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three files and write their headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["seq", "minute", "clock", "kind", "description"])?;

        let mut levels = Writer::from_path(dir.join("zone_levels.csv"))?;
        levels.write_record(["seq", "minute", "zone", "accumulated"])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(["metric", "value"])?;

        Ok(Self {
            events,
            levels,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventLogRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.seq.to_string(),
                row.minute.to_string(),
                row.clock.clone(),
                row.kind.to_owned(),
                row.description.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_zone_levels(&mut self, rows: &[ZoneLevelRow]) -> OutputResult<()> {
        for row in rows {
            self.levels.write_record(&[
                row.seq.to_string(),
                row.minute.to_string(),
                row.zone.clone(),
                row.accumulated.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summary.write_record(&[row.metric.clone(), row.value.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.levels.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
