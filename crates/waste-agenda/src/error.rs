use thiserror::Error;
use waste_core::SimTime;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgendaError {
    #[error("invalid event: timestamp {0} is negative")]
    InvalidEvent(SimTime),
}

pub type AgendaResult<T> = Result<T, AgendaError>;
