//! Simulated time model.
//!
//! # Design
//!
//! Time is an integer count of minutes since the start of the run, held in
//! `SimTime`.  There is no tick rate: the driver jumps from one scheduled
//! event to the next.  The run starts at a configurable hour of the day
//! (07:00 by default), so the hour used for peak-window lookups is
//!
//!   hour_of_day = (day_start_hour * 60 + minutes) / 60  mod 24
//!
//! `SimTime` is signed only so that a negative timestamp can be *detected*
//! and rejected by the agenda; every valid time is `>= 0`.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// Minutes elapsed since the start of the simulation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub i64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// `false` for negative timestamps, which no event may carry.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 >= 0
    }

    /// The time `minutes` after `self`.
    #[inline]
    pub fn offset(self, minutes: u64) -> SimTime {
        SimTime(self.0 + minutes as i64)
    }

    /// Minutes elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        (self.0 - earlier.0).max(0) as u64
    }

    /// Hour of the day (0–23) for a run that started at `day_start_hour`.
    #[inline]
    pub fn hour_of_day(self, day_start_hour: u32) -> u32 {
        let absolute = day_start_hour as i64 * 60 + self.0;
        absolute.div_euclid(60).rem_euclid(24) as u32
    }

    /// Whole days elapsed since the start of the day the run started in.
    #[inline]
    pub fn day(self, day_start_hour: u32) -> u64 {
        let absolute = day_start_hour as i64 * 60 + self.0;
        absolute.div_euclid(24 * 60).max(0) as u64
    }

    /// Human-readable wall clock, `"HH:MM"`, with a `" (+Nd)"` suffix once
    /// the run has crossed midnight.
    pub fn clock(self, day_start_hour: u32) -> String {
        let hour = self.hour_of_day(day_start_hour);
        let minute = self.0.rem_euclid(60);
        match self.day(day_start_hour) {
            0 => format!("{hour:02}:{minute:02}"),
            d => format!("{hour:02}:{minute:02} (+{d}d)"),
        }
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        self.offset(rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: SimTime) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}min", self.0)
    }
}

/// Format a duration in minutes as `"45min"` or `"2h 05min"`.
pub fn format_duration(minutes: u64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{hours}h {rest:02}min")
    } else {
        format!("{rest}min")
    }
}
