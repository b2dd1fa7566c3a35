//! In-memory CharacterRepository for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use delve_engine::CharacterState;

use crate::repository::{CharacterRepository, RepositoryError, Result};

/// In-memory implementation of [`CharacterRepository`].
#[derive(Default)]
pub struct MemoryCharacterRepository {
    characters: RwLock<HashMap<String, CharacterState>>,
}

impl MemoryCharacterRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterRepository for MemoryCharacterRepository {
    fn save(&self, state: &CharacterState) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        characters.insert(state.id.clone(), state.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<CharacterState>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters.get(id).cloned())
    }

    fn exists(&self, id: &str) -> bool {
        self.characters
            .read()
            .map(|characters| characters.contains_key(id))
            .unwrap_or(false)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        characters.remove(id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<String> = characters.keys().cloned().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_engine::PcgRandom;

    fn character(id: &str) -> CharacterState {
        let mut rng = PcgRandom::new(7);
        CharacterState::create(id, None, Some(4), "t", &mut rng)
    }

    #[test]
    fn save_load_round_trip() {
        let repo = MemoryCharacterRepository::new();
        let state = character("mem-1");

        repo.save(&state).unwrap();

        assert!(repo.exists("mem-1"));
        assert_eq!(repo.load("mem-1").unwrap(), Some(state));
        assert_eq!(repo.load("mem-2").unwrap(), None);
    }

    #[test]
    fn delete_is_idempotent() {
        let repo = MemoryCharacterRepository::new();
        repo.save(&character("mem-1")).unwrap();

        repo.delete("mem-1").unwrap();
        repo.delete("mem-1").unwrap();

        assert!(!repo.exists("mem-1"));
    }

    #[test]
    fn list_ids_is_sorted() {
        let repo = MemoryCharacterRepository::new();
        repo.save(&character("b")).unwrap();
        repo.save(&character("a")).unwrap();
        repo.save(&character("c")).unwrap();

        assert_eq!(repo.list_ids().unwrap(), vec!["a", "b", "c"]);
    }
}
