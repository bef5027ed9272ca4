//! `waste-sim` — discrete-event driver for the waste-collection simulator.
//!
//! # Event loop
//!
//! ```text
//! loop:
//!   stop requested?           → Stopped
//!   agenda empty?             → Drained
//!   next event past ceiling?  → TimeLimit (event stays queued)
//!   pop earliest (time, id)   → now = time
//!   event.execute(ctx)        → may schedule / cancel further events
//!   observer.on_event(record)
//! ```
//!
//! Handlers live in the private `collection`, `station` and `supervisor`
//! modules; the [`Event`] enum maps each kind to one of them.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`run_sweep`] runs configurations on Rayon's pool.     |
//! | `fx-hash`  | FxHash for the agenda's handle index.                  |

pub mod builder;
pub mod context;
pub mod error;
pub mod event;
pub mod observer;
pub mod report;
pub mod sim;
pub mod stats;
pub mod sweep;

mod collection;
mod station;
mod supervisor;


pub use builder::SimBuilder;
pub use context::SimContext;
pub use error::{SimError, SimResult};
pub use event::{Event, EventKind, EventRecord};
pub use observer::{NoopObserver, ObserverSet, SimObserver};
pub use report::{SimReport, StationSummary, StopReason, ZoneSummary};
pub use sim::{Sim, StopHandle};
pub use stats::SimStats;
pub use sweep::run_sweep;
