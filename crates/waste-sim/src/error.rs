use thiserror::Error;
use waste_core::{CoreError, SimTime, StationId};
use waste_agenda::AgendaError;
use waste_fleet::FleetError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("agenda error: {0}")]
    Agenda(#[from] AgendaError),

    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),

    /// An event names a zone, truck or station that is not in the world.
    #[error("event refers to unknown {0}")]
    UnknownEntity(String),

    #[error("cannot schedule at {time}: clock is already at {now}")]
    PastEvent { time: SimTime, now: SimTime },

    #[error("{0} has no large truck to unload into")]
    NoLargeTruck(StationId),
}

pub type SimResult<T> = Result<T, SimError>;
