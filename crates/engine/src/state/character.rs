//! The character aggregate every engine operation reads and mutates.

use crate::config::GameConfig;
use crate::dungeon_gen::generate_dungeon;
use crate::rng::RandomSource;
use crate::state::{Dungeon, Inventory, ItemName, Monster, Position};

/// Full mutable state of one character.
///
/// Created once at character creation, then threaded through every engine
/// operation. The engine never destroys a character; deletion belongs to
/// whatever persists this struct.
///
/// Battle state is carried solely by `current_monster`: the character is
/// in battle exactly while a monster is present, so the two can never
/// disagree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterState {
    /// Opaque identifier assigned by the boundary layer.
    pub id: String,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub level: u32,
    pub exp: u32,
    pub inventory: Inventory,
    pub position: Position,
    pub dungeon: Dungeon,
    pub current_monster: Option<Monster>,
    pub equipped_item: Option<ItemName>,
    /// Creation timestamp in whatever format the boundary layer records.
    pub created_at: String,
}

impl CharacterState {
    /// Create a fresh character with a newly generated dungeon.
    ///
    /// A missing name rolls the classic `Adventurer_<1000-9999>`; a missing
    /// dungeon size rolls uniformly from the default range.
    pub fn create(
        id: impl Into<String>,
        name: Option<String>,
        dungeon_size: Option<u32>,
        created_at: impl Into<String>,
        rng: &mut impl RandomSource,
    ) -> Self {
        let name = name.unwrap_or_else(|| format!("Adventurer_{}", rng.range_u32(1000, 9999)));
        let (min_size, max_size) = GameConfig::DEFAULT_DUNGEON_SIZE_RANGE;
        let size = dungeon_size.unwrap_or_else(|| rng.range_u32(min_size, max_size));

        Self {
            id: id.into(),
            name,
            health: GameConfig::STARTING_HEALTH,
            max_health: GameConfig::STARTING_HEALTH,
            level: 1,
            exp: 0,
            inventory: Inventory::new(),
            position: Position::ORIGIN,
            dungeon: generate_dungeon(size, rng),
            current_monster: None,
            equipped_item: None,
            created_at: created_at.into(),
        }
    }

    /// Whether a battle is in progress.
    pub fn in_battle(&self) -> bool {
        self.current_monster.is_some()
    }

    /// Dead means zero health. Death never ends a battle or moves the
    /// character by itself; respawn is a separate explicit action.
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Apply damage, flooring health at zero.
    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    /// Heal, capped at max health. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.health - before
    }

    /// Leave battle, discarding the monster.
    pub fn clear_battle(&mut self) {
        self.current_monster = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRandom;

    #[test]
    fn create_uses_defaults_when_unspecified() {
        let mut rng = PcgRandom::new(11);
        let state = CharacterState::create("c-1", None, None, "2025-01-01T00:00:00Z", &mut rng);

        assert!(state.name.starts_with("Adventurer_"));
        let suffix: u32 = state.name.trim_start_matches("Adventurer_").parse().unwrap();
        assert!((1000..=9999).contains(&suffix));
        assert!((4..=6).contains(&state.dungeon.size));
        assert_eq!(state.health, 20);
        assert_eq!(state.max_health, 20);
        assert_eq!(state.level, 1);
        assert_eq!(state.exp, 0);
        assert_eq!(state.position, Position::ORIGIN);
        assert!(!state.in_battle());
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn create_honors_explicit_name_and_size() {
        let mut rng = PcgRandom::new(12);
        let state = CharacterState::create(
            "c-2",
            Some("Brave Sir Robin".into()),
            Some(5),
            "2025-01-01T00:00:00Z",
            &mut rng,
        );
        assert_eq!(state.name, "Brave Sir Robin");
        assert_eq!(state.dungeon.size, 5);
    }

    #[test]
    fn take_damage_floors_at_zero() {
        let mut rng = PcgRandom::new(13);
        let mut state = CharacterState::create("c-3", None, Some(4), "t", &mut rng);
        state.take_damage(999);
        assert_eq!(state.health, 0);
        assert!(state.is_dead());
    }

    #[test]
    fn heal_caps_at_max_and_reports_restored_amount() {
        let mut rng = PcgRandom::new(14);
        let mut state = CharacterState::create("c-4", None, Some(4), "t", &mut rng);
        state.health = 18;
        let restored = state.heal(8);
        assert_eq!(restored, 2);
        assert_eq!(state.health, state.max_health);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn character_round_trips_through_json() {
        let mut rng = PcgRandom::new(15);
        let mut state =
            CharacterState::create("c-5", Some("Snapshot".into()), Some(5), "t", &mut rng);
        state.inventory.add(ItemName::HealingPotion, 2);
        state.current_monster = Some(Monster::ambush_goblin(7));
        state.equipped_item = Some(ItemName::RustySword);

        let json = serde_json::to_string(&state).unwrap();
        let back: CharacterState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert!(back.in_battle());
    }
}
