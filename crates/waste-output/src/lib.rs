//! `waste-output` — simulation output writers for the waste-collection
//! simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                      |
//! |-----------|---------|----------------------------------------------------|
//! | *(none)*  | CSV     | `events.csv`, `zone_levels.csv`, `summary.csv`     |
//! | `sqlite`  | SQLite  | `output.db` (`events`, `zone_levels`, `summary`)   |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `waste_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use waste_core::SimConfig;
//! use waste_output::{CsvWriter, SimOutputObserver};
//! use waste_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{SimOutputObserver, summary_rows};
pub use row::{EventLogRow, SummaryRow, ZoneLevelRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
