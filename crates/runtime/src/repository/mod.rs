//! Character persistence contracts and implementations.

mod file;
mod memory;

pub use file::FileCharacterRepository;
pub use memory::MemoryCharacterRepository;

use delve_engine::CharacterState;

/// Errors surfaced by repository implementations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("character repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Repository for character state persistence.
///
/// Stores the full [`CharacterState`] aggregate keyed by its identifier.
/// Implementations must be safe to share across tasks; the service layer
/// guarantees at most one in-flight action per character, so `save` for a
/// given id never races with itself.
pub trait CharacterRepository: Send + Sync {
    /// Persist a character, replacing any previous snapshot.
    fn save(&self, state: &CharacterState) -> Result<()>;

    /// Load a character by id.
    fn load(&self, id: &str) -> Result<Option<CharacterState>>;

    /// Check whether a character exists.
    fn exists(&self, id: &str) -> bool;

    /// Delete a character. Deleting an absent id is not an error.
    fn delete(&self, id: &str) -> Result<()>;

    /// List all persisted character ids, sorted.
    fn list_ids(&self) -> Result<Vec<String>>;
}

impl<R: CharacterRepository + ?Sized> CharacterRepository for std::sync::Arc<R> {
    fn save(&self, state: &CharacterState) -> Result<()> {
        (**self).save(state)
    }

    fn load(&self, id: &str) -> Result<Option<CharacterState>> {
        (**self).load(id)
    }

    fn exists(&self, id: &str) -> bool {
        (**self).exists(id)
    }

    fn delete(&self, id: &str) -> Result<()> {
        (**self).delete(id)
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        (**self).list_ids()
    }
}
