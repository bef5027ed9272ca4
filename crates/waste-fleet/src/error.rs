use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("zone name must not be empty")]
    EmptyZoneName,

    #[error("zone {zone}: invalid daily waste range {min}..={max}")]
    InvalidWasteRange { zone: String, min: u32, max: u32 },

    #[error("{what} must have a positive capacity")]
    ZeroCapacity { what: String },

    #[error("zone {0:?} is not mapped to any transfer station")]
    UnmappedZone(String),

    #[error("unknown transfer station {0:?}")]
    UnknownStation(String),

    #[error("duplicate {what} name {name:?}")]
    Duplicate { what: &'static str, name: String },
}

pub type FleetResult<T> = Result<T, FleetError>;
