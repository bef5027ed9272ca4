//! Simulation configuration.
//!
//! Every tunable constant of the model lives here with its default value, so
//! the engine never reads a hard-coded literal.  Applications typically load
//! a [`SimConfig`] from JSON (enable the `serde` feature) and hand it to the
//! simulation builder.  Missing fields fall back to the defaults below.

use crate::{CoreError, CoreResult, SimTime};

// ── Peak windows and travel ranges ────────────────────────────────────────────

/// Hour-of-day interval `[start_hour, end_hour)` during which traffic is slow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakWindow {
    pub start_hour: u32,
    pub end_hour:   u32,
}

impl PeakWindow {
    pub const fn new(start_hour: u32, end_hour: u32) -> Self {
        Self { start_hour, end_hour }
    }

    #[inline]
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

/// Inclusive `[min, max]` range of base travel minutes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelRange {
    pub min: u32,
    pub max: u32,
}

impl TravelRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Peak-hour traffic model: two daily windows, a multiplier for each regime
/// and the range base travel times are drawn from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PeakConfig {
    pub morning:             PeakWindow,
    pub evening:             PeakWindow,
    pub peak_multiplier:     f64,
    pub off_peak_multiplier: f64,
    pub peak_travel:         TravelRange,
    pub off_peak_travel:     TravelRange,
}

impl PeakConfig {
    /// `true` if `hour` (0–23) falls in either peak window.
    #[inline]
    pub fn is_peak_hour(&self, hour: u32) -> bool {
        self.morning.contains(hour) || self.evening.contains(hour)
    }
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            morning:             PeakWindow::new(7, 9),
            evening:             PeakWindow::new(17, 19),
            peak_multiplier:     1.5,
            off_peak_multiplier: 1.0,
            peak_travel:         TravelRange::new(30, 60),
            off_peak_travel:     TravelRange::new(20, 40),
        }
    }
}

// ── TimingConfig ──────────────────────────────────────────────────────────────

/// Service and travel times, all in integer minutes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Minutes spent collecting one ton at a zone.
    pub collect_minutes_per_ton: u32,
    /// Minutes spent unloading one ton into a large truck.
    pub unload_minutes_per_ton:  u32,
    /// How long a small truck may wait in a station queue before a large
    /// truck is forced (dispatched or generated).
    pub max_wait_minutes:        u32,
    /// Delay before a truck retries a zone it found empty.
    pub retry_delay_minutes:     u32,
    /// Travel time from a station back to the truck's zone.
    pub return_travel_minutes:   u32,
    /// Period of the end-of-shift supervisor sweep.
    pub supervisor_interval_minutes: u32,
    /// Hour of the day at which minute 0 falls.
    pub day_start_hour:          u32,
    /// Extra fraction of adjusted travel time billed when driving loaded.
    pub loaded_penalty:          f64,
    pub peak:                    PeakConfig,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            collect_minutes_per_ton:     10,
            unload_minutes_per_ton:      5,
            max_wait_minutes:            15,
            retry_delay_minutes:         30,
            return_travel_minutes:       20,
            supervisor_interval_minutes: 120,
            day_start_hour:              7,
            loaded_penalty:              0.5,
            peak:                        PeakConfig::default(),
        }
    }
}

impl TimingConfig {
    /// Reject configurations the duration model cannot honour.
    pub fn validate(&self) -> CoreResult<()> {
        let peak = &self.peak;
        for (what, range) in [("peak travel", peak.peak_travel), ("off-peak travel", peak.off_peak_travel)] {
            if range.min > range.max {
                return Err(CoreError::InvalidRange { what, min: range.min as u64, max: range.max as u64 });
            }
        }
        for window in [peak.morning, peak.evening] {
            if window.start_hour > window.end_hour || window.end_hour > 24 {
                return Err(CoreError::Config(format!(
                    "peak window {}..{} is not a valid hour range",
                    window.start_hour, window.end_hour,
                )));
            }
        }
        if !(peak.peak_multiplier > 0.0 && peak.off_peak_multiplier > 0.0) {
            return Err(CoreError::Config("travel multipliers must be positive".into()));
        }
        if !(self.loaded_penalty >= 0.0) {
            return Err(CoreError::Config("loaded penalty must be non-negative".into()));
        }
        if self.day_start_hour >= 24 {
            return Err(CoreError::Config(format!("day start hour {} is not in 0..24", self.day_start_hour)));
        }
        if self.supervisor_interval_minutes == 0 {
            return Err(CoreError::Config("supervisor interval must be at least one minute".into()));
        }
        Ok(())
    }
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// How many trucks of one capacity class to field, and how many trips each
/// may make per day.  A class with `trips == 0` fields no trucks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TruckClassConfig {
    pub count: u32,
    pub trips: u32,
}

impl TruckClassConfig {
    pub const fn new(count: u32, trips: u32) -> Self {
        Self { count, trips }
    }
}

/// World-construction input: the fleet per capacity class and the length of
/// the run.  Values are assumed already validated by whatever form or file
/// produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimParams {
    pub trucks_2t:         TruckClassConfig,
    pub trucks_4t:         TruckClassConfig,
    pub trucks_8t:         TruckClassConfig,
    pub trucks_10t:        TruckClassConfig,
    /// Ceiling on simulated time.  `0` means "run until the agenda drains".
    pub hours_to_simulate: u32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            trucks_2t:         TruckClassConfig::new(2, 3),
            trucks_4t:         TruckClassConfig::new(2, 3),
            trucks_8t:         TruckClassConfig::new(1, 3),
            trucks_10t:        TruckClassConfig::new(1, 3),
            hours_to_simulate: 24,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed:                          u64,
    pub params:                        SimParams,
    pub timing:                        TimingConfig,
    /// Capacity (tons) of every large truck.
    pub large_truck_capacity:          u32,
    /// Capacity (tons) of a reinforcement truck spawned by the supervisor.
    pub reinforcement_capacity:        u32,
    /// Re-run waste generation every N minutes.  `None` means one top-up at
    /// minute 0 only.
    pub regeneration_interval_minutes: Option<u32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                          42,
            params:                        SimParams::default(),
            timing:                        TimingConfig::default(),
            large_truck_capacity:          20,
            reinforcement_capacity:        10,
            regeneration_interval_minutes: None,
        }
    }
}

impl SimConfig {
    /// Latest timestamp the driver will execute, or `None` for no ceiling.
    pub fn time_limit(&self) -> Option<SimTime> {
        match self.params.hours_to_simulate {
            0 => None,
            h => Some(SimTime(h as i64 * 60)),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        self.timing.validate()?;
        if self.large_truck_capacity == 0 {
            return Err(CoreError::Config("large truck capacity must be positive".into()));
        }
        if self.reinforcement_capacity == 0 {
            return Err(CoreError::Config("reinforcement truck capacity must be positive".into()));
        }
        if self.regeneration_interval_minutes == Some(0) {
            return Err(CoreError::Config("regeneration interval must be at least one minute".into()));
        }
        if self.regeneration_interval_minutes.is_some() && self.time_limit().is_none() {
            return Err(CoreError::Config("periodic regeneration needs hours_to_simulate > 0".into()));
        }
        Ok(())
    }
}
