//! A collection zone: a pile of waste that grows by generation and shrinks
//! by collection.

use waste_core::SimRng;

use crate::{FleetError, FleetResult};

/// Geographic area that accumulates waste.
///
/// `accumulated` is private so that it can only move through
/// [`generate`](Self::generate), [`deposit`](Self::deposit) and
/// [`collect`](Self::collect), which keep the running totals in step:
///
/// ```text
/// accumulated == total_generated - total_collected
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub name:      String,
    pub min_daily: u32,
    pub max_daily: u32,
    accumulated:   u32,
    generated:     u64,
    collected:     u64,
}

impl Zone {
    pub fn new(name: impl Into<String>, min_daily: u32, max_daily: u32) -> FleetResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FleetError::EmptyZoneName);
        }
        if max_daily < min_daily {
            return Err(FleetError::InvalidWasteRange { zone: name, min: min_daily, max: max_daily });
        }
        Ok(Self {
            name,
            min_daily,
            max_daily,
            accumulated: 0,
            generated:   0,
            collected:   0,
        })
    }

    /// Tons currently waiting for collection.
    #[inline]
    pub fn accumulated(&self) -> u32 {
        self.accumulated
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.accumulated == 0
    }

    /// Add a uniformly random day's worth of waste in `[min_daily, max_daily]`.
    /// Returns the amount generated.
    pub fn generate(&mut self, rng: &mut SimRng) -> u32 {
        let tons = rng.gen_range(self.min_daily..=self.max_daily);
        self.deposit(tons);
        tons
    }

    /// Add a fixed amount of waste.
    pub fn deposit(&mut self, tons: u32) {
        self.accumulated += tons;
        self.generated += tons as u64;
    }

    /// Remove up to `requested` tons; returns what was actually removed.
    pub fn collect(&mut self, requested: u32) -> u32 {
        let taken = requested.min(self.accumulated);
        self.accumulated -= taken;
        self.collected += taken as u64;
        taken
    }

    pub fn total_generated(&self) -> u64 {
        self.generated
    }

    pub fn total_collected(&self) -> u64 {
        self.collected
    }
}
