//! Peak-hour-sensitive duration model.
//!
//! A trip is billed in three parts:
//!
//! ```text
//! collect_time      = cargo_tons * collect_minutes_per_ton
//! travel_time       = Σ round(multiplier(hour of minute i))   for i in 0..base
//! extra_loaded_time = floor(loaded_penalty * travel_time)     if loaded
//! total             = collect_time + travel_time + extra_loaded_time
//! ```
//!
//! `base` is drawn uniformly from the peak or off-peak range depending on the
//! hour at departure.  The per-minute sum lets a trip that straddles a peak
//! boundary be billed partly at each rate.

use crate::{SimRng, SimTime, TimingConfig};

// ── TripDuration ──────────────────────────────────────────────────────────────

/// Breakdown of one trip's duration, in minutes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripDuration {
    pub collect_time:      u64,
    pub travel_time:       u64,
    pub extra_loaded_time: u64,
    pub total:             u64,
}

impl TripDuration {
    pub fn new(collect_time: u64, travel_time: u64, extra_loaded_time: u64) -> Self {
        Self {
            collect_time,
            travel_time,
            extra_loaded_time,
            total: collect_time + travel_time + extra_loaded_time,
        }
    }
}

// ── DurationModel ─────────────────────────────────────────────────────────────

/// Stateless calculator over a [`TimingConfig`].  The only input besides the
/// arguments is the caller's RNG, used for the base travel draw.
#[derive(Clone, Debug)]
pub struct DurationModel {
    timing: TimingConfig,
}

impl DurationModel {
    pub fn new(timing: &TimingConfig) -> Self {
        Self { timing: timing.clone() }
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// `true` if the hour containing `now` lies in a peak window.
    #[inline]
    pub fn is_peak(&self, now: SimTime) -> bool {
        self.timing.peak.is_peak_hour(now.hour_of_day(self.timing.day_start_hour))
    }

    /// Draw an unadjusted travel time for a departure at `now`.
    pub fn base_travel(&self, now: SimTime, rng: &mut SimRng) -> u64 {
        let peak = &self.timing.peak;
        let range = if self.is_peak(now) { peak.peak_travel } else { peak.off_peak_travel };
        rng.gen_range(range.min..=range.max) as u64
    }

    /// Stretch `base` minutes of driving that start at `now`, billing each
    /// minute at the multiplier of the hour it falls in.
    pub fn peak_adjusted(&self, now: SimTime, base: u64) -> u64 {
        let peak = &self.timing.peak;
        let peak_minute = peak.peak_multiplier.round() as u64;
        let off_peak_minute = peak.off_peak_multiplier.round() as u64;
        (0..base)
            .map(|i| if self.is_peak(now.offset(i)) { peak_minute } else { off_peak_minute })
            .sum()
    }

    #[inline]
    pub fn collection_time(&self, cargo_tons: u32) -> u64 {
        cargo_tons as u64 * self.timing.collect_minutes_per_ton as u64
    }

    #[inline]
    pub fn unload_time(&self, cargo_tons: u32) -> u64 {
        cargo_tons as u64 * self.timing.unload_minutes_per_ton as u64
    }

    /// Full estimate for a trip departing at `now` carrying `cargo_tons`.
    pub fn estimate(&self, now: SimTime, cargo_tons: u32, loaded: bool, rng: &mut SimRng) -> TripDuration {
        let base = self.base_travel(now, rng);
        self.estimate_with_base(now, cargo_tons, loaded, base)
    }

    /// Deterministic part of [`estimate`](Self::estimate), given the drawn
    /// base travel time.
    pub fn estimate_with_base(&self, now: SimTime, cargo_tons: u32, loaded: bool, base: u64) -> TripDuration {
        let travel = self.peak_adjusted(now, base);
        let extra = if loaded {
            (travel as f64 * self.timing.loaded_penalty).floor() as u64
        } else {
            0
        };
        TripDuration::new(self.collection_time(cargo_tons), travel, extra)
    }
}
