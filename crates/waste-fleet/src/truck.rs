//! Small collection trucks and large landfill trucks.

use std::fmt;

use waste_core::{EventId, LargeTruckId, SimTime, TruckId, ZoneId};

use crate::{FleetError, FleetResult};

// ── TruckClass ────────────────────────────────────────────────────────────────

/// Capacity class of a small truck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TruckClass {
    TwoTon,
    FourTon,
    EightTon,
    TenTon,
    /// Spawned by the supervisor once the regular fleet is idle.
    Reinforcement,
}

impl TruckClass {
    /// The four regular classes, in distribution order.
    pub const REGULAR: [TruckClass; 4] = [Self::TwoTon, Self::FourTon, Self::EightTon, Self::TenTon];

    /// Fixed capacity in tons; reinforcement capacity comes from config.
    pub fn capacity(self) -> Option<u32> {
        match self {
            Self::TwoTon => Some(2),
            Self::FourTon => Some(4),
            Self::EightTon => Some(8),
            Self::TenTon => Some(10),
            Self::Reinforcement => None,
        }
    }

    /// Prefix of the human-readable truck label (`C2-1`, `R-3`, …).
    pub fn label_prefix(self) -> &'static str {
        match self {
            Self::TwoTon => "C2",
            Self::FourTon => "C4",
            Self::EightTon => "C8",
            Self::TenTon => "C10",
            Self::Reinforcement => "R",
        }
    }
}

// ── SmallTruck ────────────────────────────────────────────────────────────────

/// A bounded-capacity, bounded-trip truck shuttling waste from its zone to a
/// transfer station.
///
/// `pending_timeout` is a lookup handle to a queued large-truck timeout in
/// the agenda, never an owner of it.  `queued_at` is set while the truck
/// waits in a station queue.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmallTruck {
    pub id:              TruckId,
    pub label:           String,
    pub class:           TruckClass,
    pub home_zone:       ZoneId,
    pub pending_timeout: Option<EventId>,
    pub queued_at:       Option<SimTime>,
    capacity:            u32,
    load:                u32,
    trips_remaining:     u32,
}

impl SmallTruck {
    pub fn new(
        id:        TruckId,
        label:     impl Into<String>,
        class:     TruckClass,
        capacity:  u32,
        trips:     u32,
        home_zone: ZoneId,
    ) -> FleetResult<Self> {
        let label = label.into();
        if capacity == 0 {
            return Err(FleetError::ZeroCapacity { what: format!("truck {label}") });
        }
        Ok(Self {
            id,
            label,
            class,
            home_zone,
            pending_timeout: None,
            queued_at:       None,
            capacity,
            load:            0,
            trips_remaining: trips,
        })
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn load(&self) -> u32 {
        self.load
    }

    #[inline]
    pub fn free_capacity(&self) -> u32 {
        self.capacity - self.load
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.load >= self.capacity
    }

    #[inline]
    pub fn trips_remaining(&self) -> u32 {
        self.trips_remaining
    }

    /// `true` while the truck still has trips left today.
    #[inline]
    pub fn can_travel(&self) -> bool {
        self.trips_remaining > 0
    }

    /// Take on up to `tons`; returns the amount accepted.
    pub fn take_on(&mut self, tons: u32) -> u32 {
        let accepted = tons.min(self.free_capacity());
        self.load += accepted;
        accepted
    }

    /// Empty the truck, returning what it carried.
    pub fn unload(&mut self) -> u32 {
        std::mem::take(&mut self.load)
    }

    /// Consume one trip.  No-op once trips are exhausted.
    pub fn register_trip(&mut self) {
        self.trips_remaining = self.trips_remaining.saturating_sub(1);
    }
}

impl fmt::Display for SmallTruck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{}t)", self.label, self.load, self.capacity)
    }
}

// ── LargeTruck ────────────────────────────────────────────────────────────────

/// A truck that consolidates station loads and leaves for the landfill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LargeTruck {
    pub id:   LargeTruckId,
    capacity: u32,
    load:     u32,
}

impl LargeTruck {
    pub fn new(id: LargeTruckId, capacity: u32) -> FleetResult<Self> {
        if capacity == 0 {
            return Err(FleetError::ZeroCapacity { what: format!("large truck {id}") });
        }
        Ok(Self { id, capacity, load: 0 })
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn load(&self) -> u32 {
        self.load
    }

    /// Ready to leave: at (or clamped to) capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.load >= self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.load == 0
    }

    /// Add up to `tons`, clamped to capacity; returns the amount accepted.
    pub fn take_on(&mut self, tons: u32) -> u32 {
        let accepted = tons.min(self.capacity - self.load);
        self.load += accepted;
        accepted
    }

    /// Empty the truck at the landfill, returning what it carried.
    pub fn discharge(&mut self) -> u32 {
        std::mem::take(&mut self.load)
    }
}

impl fmt::Display for LargeTruck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{}t)", self.id, self.load, self.capacity)
    }
}
