//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use waste_sim::{EventKind, EventRecord, SimContext, SimObserver, SimReport};

use crate::row::{EventLogRow, SummaryRow, ZoneLevelRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that logs every event, the zone level after each
/// generation or collection, and the final summary to any [`OutputWriter`]
/// backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, record: &EventRecord, ctx: &SimContext) {
        let row = EventLogRow {
            seq:         record.seq,
            minute:      record.time.0,
            clock:       record.time.clock(ctx.day_start()),
            kind:        record.event.kind().as_str(),
            description: record.description.clone(),
        };
        let result = self.writer.write_events(std::slice::from_ref(&row));
        self.store_err(result);

        let touches_zone = matches!(record.event.kind(), EventKind::GenerateWaste | EventKind::Collect);
        if let Some(zone) = record.event.zone().filter(|_| touches_zone) {
            let z = ctx.world.zone(zone);
            let level = ZoneLevelRow {
                seq:         record.seq,
                minute:      record.time.0,
                zone:        z.name.clone(),
                accumulated: z.accumulated(),
            };
            let result = self.writer.write_zone_levels(std::slice::from_ref(&level));
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, report: &SimReport, _ctx: &SimContext) {
        let result = self.writer.write_summary(&summary_rows(report));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}

/// Flatten a report into `metric = value` rows, one per zone for the
/// remaining waste.
pub fn summary_rows(report: &SimReport) -> Vec<SummaryRow> {
    let mut rows = vec![
        SummaryRow::new("events_processed", report.events_processed as f64),
        SummaryRow::new("final_minute", report.final_time.0 as f64),
        SummaryRow::new("large_truck_dispatches", report.dispatches as f64),
        SummaryRow::new("landfill_tons", report.landfill_tons as f64),
        SummaryRow::new("overflow_tons", report.overflow_tons as f64),
        SummaryRow::new("average_wait_minutes", report.average_wait),
        SummaryRow::new("max_wait_minutes", report.max_wait as f64),
        SummaryRow::new("reinforcements", report.reinforcements as f64),
        SummaryRow::new("large_trucks_created", report.large_trucks_created as f64),
        SummaryRow::new("remaining_waste", report.remaining_waste() as f64),
    ];
    rows.extend(
        report
            .zones
            .iter()
            .map(|z| SummaryRow::new(format!("remaining:{}", z.name), z.remaining as f64)),
    );
    rows
}
