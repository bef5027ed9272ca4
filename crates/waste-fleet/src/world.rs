//! The `World` arena: every zone, small truck and station of a run.
//!
//! Entities are stored in `Vec`s and addressed by typed IDs whose value is
//! the index, so lookups are O(1) and events can hold IDs freely.  Zones and
//! stations are fixed at build time; small trucks are appended when the
//! fleet is distributed and when the supervisor spawns reinforcements.
//! Nothing is ever removed during a run.

use waste_core::{StationId, TruckId, ZoneId};

use crate::{FleetResult, SmallTruck, StationRoutes, TransferStation, TruckClass, Zone};

pub struct World {
    pub zones:    Vec<Zone>,
    pub trucks:   Vec<SmallTruck>,
    pub stations: Vec<TransferStation>,
    pub routes:   StationRoutes,
}

impl World {
    pub(crate) fn new(zones: Vec<Zone>, stations: Vec<TransferStation>, routes: StationRoutes) -> Self {
        Self {
            zones,
            trucks: Vec::new(),
            stations,
            routes,
        }
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    #[inline]
    pub fn zone(&self, id: ZoneId) -> &Zone {
        &self.zones[id.index()]
    }

    #[inline]
    pub fn zone_mut(&mut self, id: ZoneId) -> &mut Zone {
        &mut self.zones[id.index()]
    }

    #[inline]
    pub fn truck(&self, id: TruckId) -> &SmallTruck {
        &self.trucks[id.index()]
    }

    #[inline]
    pub fn truck_mut(&mut self, id: TruckId) -> &mut SmallTruck {
        &mut self.trucks[id.index()]
    }

    #[inline]
    pub fn station(&self, id: StationId) -> &TransferStation {
        &self.stations[id.index()]
    }

    #[inline]
    pub fn station_mut(&mut self, id: StationId) -> &mut TransferStation {
        &mut self.stations[id.index()]
    }

    pub fn has_zone(&self, id: ZoneId) -> bool {
        id.index() < self.zones.len()
    }

    pub fn has_truck(&self, id: TruckId) -> bool {
        id.index() < self.trucks.len()
    }

    pub fn has_station(&self, id: StationId) -> bool {
        id.index() < self.stations.len()
    }

    pub fn zone_ids(&self) -> impl Iterator<Item = ZoneId> + '_ {
        (0..self.zones.len() as u16).map(ZoneId)
    }

    pub fn truck_ids(&self) -> impl Iterator<Item = TruckId> + '_ {
        (0..self.trucks.len() as u32).map(TruckId)
    }

    pub fn station_ids(&self) -> impl Iterator<Item = StationId> + '_ {
        (0..self.stations.len() as u16).map(StationId)
    }

    pub fn zone_by_name(&self, name: &str) -> Option<ZoneId> {
        self.zones
            .iter()
            .position(|z| z.name.eq_ignore_ascii_case(name))
            .map(|i| ZoneId(i as u16))
    }

    pub fn station_by_name(&self, name: &str) -> Option<StationId> {
        self.stations
            .iter()
            .position(|s| s.name == name)
            .map(|i| StationId(i as u16))
    }

    /// Station whose partition contains `zone`.
    pub fn station_for_zone(&self, zone: ZoneId) -> FleetResult<StationId> {
        self.routes.station_for(&self.zone(zone).name)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append a small truck and return its ID.
    pub fn add_truck(
        &mut self,
        label:     impl Into<String>,
        class:     TruckClass,
        capacity:  u32,
        trips:     u32,
        home_zone: ZoneId,
    ) -> FleetResult<TruckId> {
        let id = TruckId(self.trucks.len() as u32);
        let truck = SmallTruck::new(id, label, class, capacity, trips, home_zone)?;
        self.trucks.push(truck);
        Ok(id)
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    /// Tons waiting across all zones.
    pub fn total_waste(&self) -> u64 {
        self.zones.iter().map(|z| z.accumulated() as u64).sum()
    }

    /// `true` if any small truck still has trips left.
    pub fn any_truck_active(&self) -> bool {
        self.trucks.iter().any(SmallTruck::can_travel)
    }

    /// Zone holding the most waste, if any holds some.  Ties go to the zone
    /// listed first.
    pub fn dirtiest_zone(&self) -> Option<ZoneId> {
        self.zones
            .iter()
            .enumerate()
            .filter(|(_, z)| !z.is_clean())
            .fold(None, |best: Option<(usize, u32)>, (i, z)| match best {
                Some((_, top)) if top >= z.accumulated() => best,
                _ => Some((i, z.accumulated())),
            })
            .map(|(i, _)| ZoneId(i as u16))
    }

    pub fn reinforcement_count(&self) -> usize {
        self.trucks.iter().filter(|t| t.class == TruckClass::Reinforcement).count()
    }
}
