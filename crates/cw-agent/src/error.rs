use thiserror::Error;

use cw_core::CityId;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("starting city {start} is invalid for a map of {count} cities")]
    StartOutOfRange { start: CityId, count: usize },

    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
