//! `waste-fleet` — entity storage for the waste-collection simulator.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`zone`]          | `Zone` (accumulated waste, daily generation range)         |
//! | [`truck`]         | `SmallTruck`, `LargeTruck`, `TruckClass`                   |
//! | [`station`]       | `TransferStation` (FIFO wait queue + large-truck slot)     |
//! | [`routes`]        | `StationRoutes` (fixed zone → station partition)           |
//! | [`world`]         | `World` arena addressed by typed IDs                       |
//! | [`builder`]       | `WorldBuilder`, the standard Teresina layout               |
//! | [`distribution`]  | round-robin fleet distribution from `SimParams`            |
//! | [`error`]         | `FleetError`, `FleetResult<T>`                             |
//!
//! Entities hold no references to each other.  Trucks name their home zone by
//! `ZoneId`, stations queue `TruckId`s, and events in `waste-sim` carry IDs
//! too, so one truck can be referenced by the fleet list and by any number of
//! pending events without shared ownership.

pub mod builder;
pub mod distribution;
pub mod error;
pub mod routes;
pub mod station;
pub mod truck;
pub mod world;
pub mod zone;


pub use builder::{STATION_A, STATION_B, WorldBuilder};
pub use distribution::distribute_fleet;
pub use error::{FleetError, FleetResult};
pub use routes::StationRoutes;
pub use station::TransferStation;
pub use truck::{LargeTruck, SmallTruck, TruckClass};
pub use world::World;
pub use zone::Zone;
