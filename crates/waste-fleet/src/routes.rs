//! Fixed zone → transfer-station partition.
//!
//! Assignment is by zone name, case-insensitive.  A zone without an entry is
//! a configuration gap and surfaces as [`FleetError::UnmappedZone`] the first
//! time a truck from that zone heads for a station.

use std::collections::HashMap;

use waste_core::StationId;

use crate::{FleetError, FleetResult};

#[derive(Clone, Debug, Default)]
pub struct StationRoutes {
    by_zone: HashMap<String, StationId>,
}

impl StationRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `zone` to `station`, replacing any previous entry.
    pub fn assign(&mut self, zone: &str, station: StationId) {
        self.by_zone.insert(zone.to_lowercase(), station);
    }

    pub fn station_for(&self, zone: &str) -> FleetResult<StationId> {
        self.by_zone
            .get(&zone.to_lowercase())
            .copied()
            .ok_or_else(|| FleetError::UnmappedZone(zone.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.by_zone.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_zone.is_empty()
    }
}
