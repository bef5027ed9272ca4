//! Fluent builder for constructing a [`World`].
//!
//! # Usage
//!
//! ```rust
//! use waste_fleet::WorldBuilder;
//!
//! let world = WorldBuilder::new()
//!     .zone("Norte", 15, 30)
//!     .zone("Sul", 20, 40)
//!     .station("Estação A")
//!     .route("Norte", "Estação A")
//!     .route("Sul", "Estação A")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(world.zones.len(), 2);
//! assert_eq!(world.stations.len(), 1);
//! ```

use waste_core::StationId;

use crate::{FleetError, FleetResult, StationRoutes, TransferStation, World, Zone};

pub const STATION_A: &str = "Estação A";
pub const STATION_B: &str = "Estação B";

/// Teresina zones in world order, with their daily generation range (tons).
const STANDARD_ZONES: [(&str, u32, u32); 5] = [
    ("Sul", 20, 40),
    ("Sudeste", 18, 35),
    ("Centro", 10, 20),
    ("Leste", 15, 25),
    ("Norte", 15, 30),
];

#[derive(Default)]
pub struct WorldBuilder {
    zones:    Vec<(String, u32, u32)>,
    stations: Vec<String>,
    routes:   Vec<(String, String)>,
}

impl WorldBuilder {
    /// Empty builder: no zones, no stations, no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard city layout: five zones, two stations, and the fixed
    /// partition Norte/Centro → Estação A, Sul/Sudeste/Leste → Estação B.
    pub fn standard() -> Self {
        STANDARD_ZONES
            .iter()
            .fold(Self::new(), |b, &(name, min, max)| b.zone(name, min, max))
            .station(STATION_A)
            .station(STATION_B)
            .route("Norte", STATION_A)
            .route("Centro", STATION_A)
            .route("Sul", STATION_B)
            .route("Sudeste", STATION_B)
            .route("Leste", STATION_B)
    }

    pub fn zone(mut self, name: impl Into<String>, min_daily: u32, max_daily: u32) -> Self {
        self.zones.push((name.into(), min_daily, max_daily));
        self
    }

    pub fn station(mut self, name: impl Into<String>) -> Self {
        self.stations.push(name.into());
        self
    }

    /// Send trucks from `zone` to `station`.
    pub fn route(mut self, zone: impl Into<String>, station: impl Into<String>) -> Self {
        self.routes.push((zone.into(), station.into()));
        self
    }

    /// Validate names and ranges and assemble the arena.
    ///
    /// Zones without a route are accepted here; the gap is reported as
    /// [`FleetError::UnmappedZone`] when a truck from that zone first needs a
    /// station.
    pub fn build(self) -> FleetResult<World> {
        let mut zones = Vec::with_capacity(self.zones.len());
        for (name, min, max) in self.zones {
            if zones.iter().any(|z: &Zone| z.name.eq_ignore_ascii_case(&name)) {
                return Err(FleetError::Duplicate { what: "zone", name });
            }
            zones.push(Zone::new(name, min, max)?);
        }

        let mut stations: Vec<TransferStation> = Vec::with_capacity(self.stations.len());
        for (i, name) in self.stations.into_iter().enumerate() {
            if stations.iter().any(|s| s.name == name) {
                return Err(FleetError::Duplicate { what: "station", name });
            }
            stations.push(TransferStation::new(StationId(i as u16), name));
        }

        let mut routes = StationRoutes::new();
        for (zone, station) in self.routes {
            let id = stations
                .iter()
                .position(|s| s.name == station)
                .map(|i| StationId(i as u16))
                .ok_or(FleetError::UnknownStation(station))?;
            routes.assign(&zone, id);
        }

        Ok(World::new(zones, stations, routes))
    }
}
