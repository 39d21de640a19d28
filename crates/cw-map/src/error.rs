//! Map error type.

use thiserror::Error;

use cw_core::CityId;

/// Errors produced by `cw-map`.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("a map needs at least one city")]
    Empty,

    #[error("{city} is out of range for a map of {count} cities")]
    CityOutOfRange { city: CityId, count: usize },

    #[error("road from {0} to itself")]
    SelfLoop(CityId),

    #[error("road between {a} and {b} has zero length")]
    ZeroLength { a: CityId, b: CityId },

    #[error("map parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapResult<T> = Result<T, MapError>;
