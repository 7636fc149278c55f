//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and from the simulation core so
//! clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use sim_core::{ConfigError, SpawnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("tick rate must be positive")]
    InvalidTickRate,

    #[error("step delta must be finite and non-negative, got {0}")]
    InvalidDelta(f32),

    #[error("invalid simulation config")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Spawn(#[from] SpawnError),
}
