use sl_core::{AgentId, CoreError, Vec2};
use sl_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("time delta must be finite and non-negative, got {0}")]
    InvalidDelta(f64),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("command position must be finite, got {0}")]
    InvalidPosition(Vec2),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
