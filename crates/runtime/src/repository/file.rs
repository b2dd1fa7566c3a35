//! File-based CharacterRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use delve_engine::CharacterState;

use crate::repository::{CharacterRepository, RepositoryError, Result};

/// File-based implementation of [`CharacterRepository`].
///
/// Stores each character as `<id>.json` under the base directory. Saves go
/// through a temp file and an atomic rename, so a crash mid-write leaves
/// the previous snapshot intact.
pub struct FileCharacterRepository {
    base_dir: PathBuf,
}

impl FileCharacterRepository {
    /// Create a repository rooted at `base_dir`, creating it if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    fn character_path(&self, id: &str) -> PathBuf {
        self.base_dir.join(format!("{id}.json"))
    }
}

impl CharacterRepository for FileCharacterRepository {
    fn save(&self, state: &CharacterState) -> Result<()> {
        let path = self.character_path(&state.id);
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(state)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!(id = %state.id, path = %path.display(), "saved character");

        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<CharacterState>> {
        let path = self.character_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let state: CharacterState = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        Ok(Some(state))
    }

    fn exists(&self, id: &str) -> bool {
        self.character_path(id).exists()
    }

    fn delete(&self, id: &str) -> Result<()> {
        let path = self.character_path(id);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!(id = %id, "deleted character");
        }

        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;
        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(id) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_suffix(".json"))
            {
                ids.push(id.to_string());
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_engine::{ItemName, PcgRandom};

    fn character(id: &str) -> CharacterState {
        let mut rng = PcgRandom::new(9);
        let mut state = CharacterState::create(id, None, Some(5), "t", &mut rng);
        state.inventory.add(ItemName::HealingPotion, 2);
        state
    }

    #[test]
    fn save_load_round_trip_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileCharacterRepository::new(dir.path()).unwrap();
        let state = character("file-1");

        repo.save(&state).unwrap();

        assert!(repo.exists("file-1"));
        assert_eq!(repo.load("file-1").unwrap(), Some(state));
        assert!(!dir.path().join("file-1.json.tmp").exists());
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileCharacterRepository::new(dir.path()).unwrap();
        let mut state = character("file-2");

        repo.save(&state).unwrap();
        state.exp = 42;
        repo.save(&state).unwrap();

        assert_eq!(repo.load("file-2").unwrap().unwrap().exp, 42);
    }

    #[test]
    fn missing_character_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileCharacterRepository::new(dir.path()).unwrap();
        assert_eq!(repo.load("ghost").unwrap(), None);
    }

    #[test]
    fn list_ids_skips_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileCharacterRepository::new(dir.path()).unwrap();
        repo.save(&character("b")).unwrap();
        repo.save(&character("a")).unwrap();
        fs::write(dir.path().join("stray.json.tmp"), b"{}").unwrap();

        let ids = repo.list_ids().unwrap();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
