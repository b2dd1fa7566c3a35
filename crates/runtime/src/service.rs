//! The game service: one entry point per player-facing action.
//!
//! Every action follows the same shape: acquire the character's lock,
//! load the snapshot, run one engine operation against it, persist, and
//! return the engine's outcome. A failed operation persists nothing.
//! Locks are per character, so two players never block each other.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::Mutex;

use delve_engine::{
    self as engine, CharacterState, CombatAction, CombatOutcome, Direction, EngineError,
    EquipOutcome, GameConfig, ItemName, MoveOutcome, PcgRandom, RespawnOutcome, StatusView,
    UseItemOutcome,
};

use crate::error::{Result, RuntimeError};
use crate::repository::CharacterRepository;

/// Serializes actions per character over a pluggable repository.
pub struct GameService<R> {
    repository: R,
    config: GameConfig,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<R: CharacterRepository> GameService<R> {
    /// Create a service with the default game configuration.
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, GameConfig::new())
    }

    pub fn with_config(repository: R, config: GameConfig) -> Self {
        Self {
            repository,
            config,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Create and persist a new character.
    ///
    /// The identifier is a fresh random hex string; name and dungeon size
    /// fall back to engine defaults when omitted.
    pub async fn create_character(
        &self,
        name: Option<String>,
        dungeon_size: Option<u32>,
    ) -> Result<StatusView> {
        let raw: [u8; 8] = rand::random();
        let id = hex::encode(raw);
        let created_at = chrono::Utc::now().to_rfc3339();

        let mut rng = PcgRandom::new(rand::random());
        let state = CharacterState::create(id.as_str(), name, dungeon_size, created_at, &mut rng);
        self.repository.save(&state)?;

        tracing::info!(id = %id, name = %state.name, size = state.dungeon.size, "created character");
        Ok(StatusView::of(&state))
    }

    /// Move the character one step in a cardinal direction.
    pub async fn move_character(&self, id: &str, direction: &str) -> Result<MoveOutcome> {
        let direction: Direction = parse_input(direction)?;
        self.with_character(id, |state, config, rng| {
            Ok(engine::move_character(state, direction, config, rng))
        })
        .await
    }

    /// Resolve one combat action (attack or run) against the current monster.
    pub async fn combat_action(&self, id: &str, action: &str) -> Result<CombatOutcome> {
        let action: CombatAction = parse_input(action)?;
        self.with_character(id, |state, config, rng| {
            Ok(engine::resolve_combat(state, action, config, rng)?)
        })
        .await
    }

    /// Consume one item from the character's inventory.
    ///
    /// A name outside the item vocabulary cannot be in any inventory, so
    /// it reads as not-in-inventory rather than a malformed request.
    pub async fn use_item(&self, id: &str, item: &str) -> Result<UseItemOutcome> {
        let item: ItemName = item
            .parse()
            .map_err(|_| EngineError::ItemNotFound(item.to_string()))?;
        self.with_character(id, |state, _, rng| Ok(engine::use_item(state, item, rng)?))
            .await
    }

    /// Equip an owned item. Unknown names read as not-owned.
    pub async fn equip_item(&self, id: &str, item: &str) -> Result<EquipOutcome> {
        let item: ItemName = item
            .parse()
            .map_err(|_| EngineError::ItemNotOwned(item.to_string()))?;
        self.with_character(id, |state, _, _| Ok(engine::equip(state, item)?))
            .await
    }

    /// Bring a dead character back at the dungeon entrance.
    pub async fn respawn(&self, id: &str) -> Result<RespawnOutcome> {
        self.with_character(id, |state, _, _| Ok(engine::respawn(state)?))
            .await
    }

    /// Snapshot the character for status reporting.
    pub async fn status(&self, id: &str) -> Result<StatusView> {
        let state = self.read_character(id).await?;
        Ok(StatusView::of(&state))
    }

    /// Render the character's explored map.
    pub async fn ascii_map(&self, id: &str) -> Result<String> {
        let state = self.read_character(id).await?;
        Ok(engine::ascii_map(&state))
    }

    /// Delete a character permanently.
    pub async fn delete_character(&self, id: &str) -> Result<()> {
        let lock = self.character_lock(id).await;
        let _guard = lock.lock().await;

        if !self.repository.exists(id) {
            return Err(RuntimeError::CharacterNotFound { id: id.to_string() });
        }
        self.repository.delete(id)?;
        self.locks.lock().await.remove(id);

        tracing::info!(id = %id, "deleted character");
        Ok(())
    }

    /// List all persisted character ids.
    pub async fn list_characters(&self) -> Result<Vec<String>> {
        Ok(self.repository.list_ids()?)
    }

    /// Run one mutating engine operation under the character's lock.
    ///
    /// The snapshot is saved only after the operation succeeds, so a
    /// rejected action leaves the persisted character untouched.
    async fn with_character<T>(
        &self,
        id: &str,
        op: impl FnOnce(&mut CharacterState, &GameConfig, &mut PcgRandom) -> Result<T>,
    ) -> Result<T> {
        let lock = self.character_lock(id).await;
        let _guard = lock.lock().await;

        let mut state = self
            .repository
            .load(id)?
            .ok_or_else(|| RuntimeError::CharacterNotFound { id: id.to_string() })?;

        let mut rng = PcgRandom::new(rand::random());
        let outcome = op(&mut state, &self.config, &mut rng)?;
        self.repository.save(&state)?;

        tracing::debug!(id = %id, health = state.health, level = state.level, "action applied");
        Ok(outcome)
    }

    async fn read_character(&self, id: &str) -> Result<CharacterState> {
        let lock = self.character_lock(id).await;
        let _guard = lock.lock().await;

        self.repository
            .load(id)?
            .ok_or_else(|| RuntimeError::CharacterNotFound { id: id.to_string() })
    }

    async fn character_lock(&self, id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(id.to_string()).or_default().clone()
    }
}

/// Parse a raw direction or combat action, mapping failures to
/// [`EngineError::InvalidInput`] with the offending text.
fn parse_input<T: FromStr>(raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| EngineError::InvalidInput(raw.to_string()).into())
}
