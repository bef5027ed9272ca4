//! Plain data row types written by output backends.

/// One executed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLogRow {
    pub seq:         u64,
    /// Simulated minute since the start of the run.
    pub minute:      i64,
    /// Wall-clock rendering of `minute` (`HH:MM`, with a day suffix after
    /// midnight).
    pub clock:       String,
    pub kind:        &'static str,
    pub description: String,
}

/// Waste left in one zone right after an event touched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneLevelRow {
    pub seq:         u64,
    pub minute:      i64,
    pub zone:        String,
    pub accumulated: u32,
}

/// One `metric = value` line of the end-of-run summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub metric: String,
    pub value:  f64,
}

impl SummaryRow {
    pub fn new(metric: impl Into<String>, value: f64) -> Self {
        Self { metric: metric.into(), value }
    }
}
