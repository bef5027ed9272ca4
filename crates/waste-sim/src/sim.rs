//! The `Sim` driver loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};
use waste_agenda::Scheduled;

use crate::{EventRecord, SimContext, SimObserver, SimReport, SimResult, StopReason};

// ── StopHandle ────────────────────────────────────────────────────────────────

/// Cooperative stop flag.  Clone it into another thread and call
/// [`request_stop`](Self::request_stop); the run ends before its next event.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Clear a previous request so the run can be resumed.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// Owns one run's [`SimContext`] and pops events until the agenda drains,
/// the time ceiling is reached, or a stop is requested.
///
/// Create via [`SimBuilder`](crate::SimBuilder).
pub struct Sim {
    pub ctx:   SimContext,
    stop:      StopHandle,
    processed: u64,
    last:      Option<EventRecord>,
}

impl Sim {
    pub(crate) fn new(ctx: SimContext) -> Self {
        Self {
            ctx,
            stop:      StopHandle::default(),
            processed: 0,
            last:      None,
        }
    }

    /// A handle that stops [`run`](Self::run) between two events.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn events_processed(&self) -> u64 {
        self.processed
    }

    pub fn last_event(&self) -> Option<&EventRecord> {
        self.last.as_ref()
    }

    /// Execute events until the agenda drains, the next event lies past
    /// `config.time_limit()`, or the stop handle fires.  Events still pending
    /// at the ceiling are left on the agenda.
    ///
    /// Any handler error (for example an unmapped zone) aborts the run and is
    /// returned as is.
    pub fn run<O: SimObserver + ?Sized>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        let limit = self.ctx.config.time_limit();
        let reason = loop {
            if self.stop.is_requested() {
                break StopReason::Stopped;
            }
            match self.ctx.agenda.next_time() {
                None => break StopReason::Drained,
                Some(t) if limit.is_some_and(|l| t > l) => break StopReason::TimeLimit,
                Some(_) => {}
            }
            if let Some(record) = self.step()? {
                observer.on_event(&record, &self.ctx);
            }
        };

        let report = self.report(reason);
        info!(
            reason = ?reason,
            events = self.processed,
            at = %self.ctx.now.clock(self.ctx.day_start()),
            remaining = report.remaining_waste(),
            "simulation finished"
        );
        observer.on_sim_end(&report, &self.ctx);
        Ok(report)
    }

    /// Execute exactly one event, ignoring the time ceiling and stop flag.
    /// Returns `None` if the agenda is empty.
    pub fn step(&mut self) -> SimResult<Option<EventRecord>> {
        let Some(Scheduled { id, time, event }) = self.ctx.agenda.pop_earliest() else {
            return Ok(None);
        };
        self.ctx.now = time;
        let description = event.describe(&self.ctx.world);
        debug!(%id, at = %time.clock(self.ctx.day_start()), "{description}");

        event.execute(id, &mut self.ctx)?;

        let record = EventRecord {
            seq: self.processed,
            id,
            time,
            event,
            description,
        };
        self.processed += 1;
        self.last = Some(record.clone());
        Ok(Some(record))
    }

    /// Summary of the run so far.
    pub fn report(&self, reason: StopReason) -> SimReport {
        SimReport::collect(&self.ctx, self.processed, reason, self.last.as_ref())
    }
}
