//! Observer hooks invoked by the driver.

use crate::{EventRecord, SimContext, SimReport};

/// Callbacks invoked by [`Sim::run`](crate::Sim::run).
///
/// Both hooks default to no-ops.  `on_event` runs synchronously right after
/// an event executes, with the mutated world visible through `ctx`.
///
/// # Example: progress printer
///
/// ```rust
/// use waste_sim::{EventRecord, SimContext, SimObserver};
///
/// struct Progress { every: u64 }
///
/// impl SimObserver for Progress {
///     fn on_event(&mut self, record: &EventRecord, _ctx: &SimContext) {
///         if record.seq % self.every == 0 {
///             println!("{} {}", record.time, record.description);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    fn on_event(&mut self, _record: &EventRecord, _ctx: &SimContext) {}

    /// Called once when the run ends, with the final report.
    fn on_sim_end(&mut self, _report: &SimReport, _ctx: &SimContext) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Fans every callback out to several observers in registration order.
#[derive(Default)]
pub struct ObserverSet<'a> {
    observers: Vec<&'a mut dyn SimObserver>,
}

impl<'a> ObserverSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: &'a mut dyn SimObserver) {
        self.observers.push(observer);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, observer: &'a mut dyn SimObserver) -> Self {
        self.register(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl SimObserver for ObserverSet<'_> {
    fn on_event(&mut self, record: &EventRecord, ctx: &SimContext) {
        for o in &mut self.observers {
            o.on_event(record, ctx);
        }
    }

    fn on_sim_end(&mut self, report: &SimReport, ctx: &SimContext) {
        for o in &mut self.observers {
            o.on_sim_end(report, ctx);
        }
    }
}
