use seir_core::EpiError;
use seir_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid distribution parameters for {what}: {reason}")]
    Distribution {
        what:   &'static str,
        reason: String,
    },

    #[error("population of {0} agents exceeds the agent id space")]
    PopulationTooLarge(usize),

    #[error(transparent)]
    Core(#[from] EpiError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type AgentResult<T> = Result<T, AgentError>;
