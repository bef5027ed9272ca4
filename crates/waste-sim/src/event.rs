//! The closed set of event kinds and their dispatch.
//!
//! Payloads are typed IDs into the [`World`] arena, so any number of pending
//! events may name the same truck or station.  [`Event::execute`] is the only
//! place that maps a kind to its handler.

use std::fmt;

use waste_core::{EventId, LargeTruckId, SimTime, StationId, TruckId, ZoneId};
use waste_fleet::World;

use crate::{SimContext, SimError, SimResult, collection, station, supervisor};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Top up a zone by a random day's worth of waste.
    GenerateWaste { zone: ZoneId },
    /// A small truck works its zone.
    Collect { truck: TruckId, zone: ZoneId },
    /// A small truck leaves `zone` for the station serving it.
    DepartForStation { truck: TruckId, zone: ZoneId },
    ArriveAtStation { station: StationId, truck: TruckId },
    /// The wait tolerance of a queued small truck has run out.
    LargeTruckTimeout { station: StationId },
    /// A large truck left for the landfill.  Pure notification: its load was
    /// accounted when the dispatch was decided.
    LargeTruckDeparture { truck: LargeTruckId, tons: u32, station: StationId },
    /// Periodic end-of-shift sweep.
    SupervisorCheck,
}

/// Payload-free discriminant, for logs and output tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    GenerateWaste,
    Collect,
    DepartForStation,
    ArriveAtStation,
    LargeTruckTimeout,
    LargeTruckDeparture,
    SupervisorCheck,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GenerateWaste => "GenerateWaste",
            Self::Collect => "Collect",
            Self::DepartForStation => "DepartForStation",
            Self::ArriveAtStation => "ArriveAtStation",
            Self::LargeTruckTimeout => "LargeTruckTimeout",
            Self::LargeTruckDeparture => "LargeTruckDeparture",
            Self::SupervisorCheck => "SupervisorCheck",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::GenerateWaste { .. } => EventKind::GenerateWaste,
            Self::Collect { .. } => EventKind::Collect,
            Self::DepartForStation { .. } => EventKind::DepartForStation,
            Self::ArriveAtStation { .. } => EventKind::ArriveAtStation,
            Self::LargeTruckTimeout { .. } => EventKind::LargeTruckTimeout,
            Self::LargeTruckDeparture { .. } => EventKind::LargeTruckDeparture,
            Self::SupervisorCheck => EventKind::SupervisorCheck,
        }
    }

    /// The small truck this event moves, if any.
    pub fn truck(&self) -> Option<TruckId> {
        match *self {
            Self::Collect { truck, .. }
            | Self::DepartForStation { truck, .. }
            | Self::ArriveAtStation { truck, .. } => Some(truck),
            _ => None,
        }
    }

    pub fn zone(&self) -> Option<ZoneId> {
        match *self {
            Self::GenerateWaste { zone }
            | Self::Collect { zone, .. }
            | Self::DepartForStation { zone, .. } => Some(zone),
            _ => None,
        }
    }

    pub fn station(&self) -> Option<StationId> {
        match *self {
            Self::ArriveAtStation { station, .. }
            | Self::LargeTruckTimeout { station }
            | Self::LargeTruckDeparture { station, .. } => Some(station),
            _ => None,
        }
    }

    /// Reject events whose IDs do not resolve in `world`.
    pub fn validate(&self, world: &World) -> SimResult<()> {
        if let Some(zone) = self.zone().filter(|&z| !world.has_zone(z)) {
            return Err(SimError::UnknownEntity(zone.to_string()));
        }
        if let Some(truck) = self.truck().filter(|&t| !world.has_truck(t)) {
            return Err(SimError::UnknownEntity(truck.to_string()));
        }
        if let Some(station) = self.station().filter(|&s| !world.has_station(s)) {
            return Err(SimError::UnknownEntity(station.to_string()));
        }
        Ok(())
    }

    /// Human-readable one-liner with entity names resolved.
    pub fn describe(&self, world: &World) -> String {
        match *self {
            Self::GenerateWaste { zone } => format!("waste generation in {}", world.zone(zone).name),
            Self::Collect { truck, zone } => {
                format!("{} collecting in {}", world.truck(truck).label, world.zone(zone).name)
            }
            Self::DepartForStation { truck, zone } => {
                format!("{} leaving {} for its station", world.truck(truck).label, world.zone(zone).name)
            }
            Self::ArriveAtStation { station, truck } => {
                format!("{} arriving at {}", world.truck(truck).label, world.station(station).name)
            }
            Self::LargeTruckTimeout { station } => {
                format!("wait tolerance reached at {}", world.station(station).name)
            }
            Self::LargeTruckDeparture { truck, tons, station } => {
                format!("{truck} leaving {} for the landfill with {tons}t", world.station(station).name)
            }
            Self::SupervisorCheck => "supervisor check".to_owned(),
        }
    }

    /// Apply this event to `ctx`.  `id` is the handle it was scheduled under.
    pub(crate) fn execute(self, id: EventId, ctx: &mut SimContext) -> SimResult<()> {
        match self {
            Self::GenerateWaste { zone } => collection::generate_waste(ctx, zone),
            Self::Collect { truck, zone } => collection::collect(ctx, truck, zone),
            Self::DepartForStation { truck, zone } => collection::depart_for_station(ctx, truck, zone),
            Self::ArriveAtStation { station, truck } => station::receive(ctx, station, truck),
            Self::LargeTruckTimeout { station } => station::timeout(ctx, station, id),
            Self::LargeTruckDeparture { .. } => Ok(()),
            Self::SupervisorCheck => supervisor::check(ctx),
        }
    }
}

/// One executed event, as handed to observers.
#[derive(Clone, Debug, PartialEq)]
pub struct EventRecord {
    /// 0-based position in execution order.
    pub seq:         u64,
    pub id:          EventId,
    pub time:        SimTime,
    pub event:       Event,
    pub description: String,
}
