//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `events`, `zone_levels` and `summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EventLogRow, OutputResult, SummaryRow, ZoneLevelRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 seq         INTEGER PRIMARY KEY,
                 minute      INTEGER NOT NULL,
                 clock       TEXT    NOT NULL,
                 kind        TEXT    NOT NULL,
                 description TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS zone_levels (
                 seq         INTEGER NOT NULL,
                 minute      INTEGER NOT NULL,
                 zone        TEXT    NOT NULL,
                 accumulated INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS summary (
                 metric TEXT PRIMARY KEY,
                 value  REAL NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventLogRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events (seq, minute, clock, kind, description) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.seq, row.minute, row.clock, row.kind, row.description])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_zone_levels(&mut self, rows: &[ZoneLevelRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO zone_levels (seq, minute, zone, accumulated) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.seq, row.minute, row.zone, row.accumulated])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt =
                tx.prepare_cached("INSERT OR REPLACE INTO summary (metric, value) VALUES (?1, ?2)")?;
            for row in rows {
                stmt.execute(rusqlite::params![row.metric, row.value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
