//! Error types raised by the runtime layer.

use delve_engine::EngineError;

use crate::repository::RepositoryError;

/// Errors surfaced by [`GameService`](crate::GameService) operations.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// No persisted character matches the identifier.
    #[error("character {id} not found")]
    CharacterNotFound { id: String },

    /// The engine rejected the action.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Persistence failed before or after the action.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
