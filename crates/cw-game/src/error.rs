use cw_agent::AgentError;
use cw_core::CwError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] CwError),

    #[error("a game needs at least one agent")]
    NoAgents,

    #[error("agent {name:?}: {source}")]
    Agent {
        name:   String,
        #[source]
        source: AgentError,
    },
}

pub type GameResult<T> = Result<T, GameError>;
