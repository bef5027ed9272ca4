//! `waste-core` — foundational types for the waste-collection simulator.
//!
//! This crate is a dependency of every other `waste-*` crate.  It has no
//! `waste-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `ZoneId`, `StationId`, `TruckId`, `LargeTruckId`, `EventId` |
//! | [`time`]        | `SimTime` (integer minutes), clock/duration formatting     |
//! | [`rng`]         | `SimRng` (seeded, reproducible)                            |
//! | [`config`]      | `SimConfig`, `SimParams`, `TimingConfig`, `PeakConfig`     |
//! | [`duration`]    | `DurationModel`, `TripDuration`                            |
//! | [`error`]       | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load a `SimConfig` from JSON.                  |

pub mod config;
pub mod duration;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PeakConfig, PeakWindow, SimConfig, SimParams, TimingConfig, TravelRange, TruckClassConfig};
pub use duration::{DurationModel, TripDuration};
pub use error::{CoreError, CoreResult};
pub use ids::{EventId, LargeTruckId, StationId, TruckId, ZoneId};
pub use rng::SimRng;
pub use time::{SimTime, format_duration};
