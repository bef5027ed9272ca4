//! Run-wide counters fed by the event handlers.

/// Aggregates collected while a run executes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimStats {
    /// Minutes each unloading truck spent in a station queue (0 if it
    /// unloaded on arrival).
    waits:              Vec<u64>,
    pub generated_tons: u64,
    pub collected_tons: u64,
    /// Tons moved from small trucks into large trucks.
    pub unloaded_tons:  u64,
    /// Tons that did not fit in a large truck and were dropped.
    pub overflow_tons:  u64,
    pub dispatches:     u64,
    /// Tons carried off by dispatched large trucks.
    pub landfill_tons:  u64,
    pub reinforcements: u64,
}

impl SimStats {
    pub fn record_wait(&mut self, minutes: u64) {
        self.waits.push(minutes);
    }

    pub fn wait_samples(&self) -> &[u64] {
        &self.waits
    }

    /// Mean station wait in minutes, `0.0` before any unload.
    pub fn average_wait(&self) -> f64 {
        if self.waits.is_empty() {
            return 0.0;
        }
        self.waits.iter().sum::<u64>() as f64 / self.waits.len() as f64
    }

    pub fn max_wait(&self) -> u64 {
        self.waits.iter().copied().max().unwrap_or(0)
    }
}
