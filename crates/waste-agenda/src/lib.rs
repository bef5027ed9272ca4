//! `waste-agenda` — the time-ordered event agenda.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`agenda`]    | `Agenda<E>`, `Scheduled<E>`, `Pending<'_, E>`       |
//! | [`error`]     | `AgendaError`, `AgendaResult<T>`                    |
//!
//! # Ordering model (summary)
//!
//! ```text
//! key        = (time, EventId)     EventId = insertion sequence number
//! pop        → smallest key        earliest time, then oldest insertion
//! cancel(id) → remove by handle    O(log n), other keys untouched
//! ```
//!
//! The agenda is generic over the payload so it knows nothing of the event
//! kinds `waste-sim` dispatches.

pub mod agenda;
pub mod error;

#[cfg(test)]
mod tests;

pub use agenda::{Agenda, Pending, Scheduled};
pub use error::{AgendaError, AgendaResult};
