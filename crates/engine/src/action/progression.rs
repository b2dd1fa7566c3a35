//! Experience, items, and coming back from the dead.

use crate::config::GameConfig;
use crate::error::EngineError;
use crate::rng::RandomSource;
use crate::state::{CharacterState, ItemName, Position};

/// Outcome of consuming an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemOutcome {
    pub item: ItemName,
    /// Health actually restored, after the max-health cap.
    pub healed: u32,
    pub health: u32,
}

/// Outcome of equipping an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipOutcome {
    pub equipped: ItemName,
}

/// Outcome of a respawn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RespawnOutcome {
    pub health: u32,
    pub exp: u32,
    pub position: Position,
}

/// Consume every pending level-up.
///
/// The threshold for leaving level `n` is `n * 20` experience. Each
/// level-up subtracts the threshold, raises the level, adds 5 max health
/// and fully heals, so one large grant can cascade through several levels.
pub fn apply_level_ups(state: &mut CharacterState) {
    loop {
        let threshold = state.level * GameConfig::LEVEL_UP_STEP;
        if state.exp < threshold {
            return;
        }
        state.exp -= threshold;
        state.level += 1;
        state.max_health += GameConfig::LEVEL_UP_HEALTH_GAIN;
        state.health = state.max_health;
    }
}

/// Bring a dead character back at the entrance.
///
/// Fails with [`EngineError::InvalidState`] while the character is still
/// alive. Respawning fully heals, clears any battle, returns the
/// character to the origin and docks experience (never below zero, and
/// never undoing a level).
pub fn respawn(state: &mut CharacterState) -> Result<RespawnOutcome, EngineError> {
    if !state.is_dead() {
        return Err(EngineError::InvalidState("character is not dead"));
    }

    state.health = state.max_health;
    state.position = Position::ORIGIN;
    state.exp = state.exp.saturating_sub(GameConfig::RESPAWN_EXP_PENALTY);
    state.clear_battle();

    Ok(RespawnOutcome {
        health: state.health,
        exp: state.exp,
        position: state.position,
    })
}

/// Consume one item from the inventory.
///
/// Only the healing potion has a use effect today; anything else the
/// character owns fails with [`EngineError::NoEffect`] and is not
/// consumed. Using a potion at full health still consumes it.
pub fn use_item(
    state: &mut CharacterState,
    item: ItemName,
    rng: &mut impl RandomSource,
) -> Result<UseItemOutcome, EngineError> {
    let Some(index) = state.inventory.find(item) else {
        return Err(EngineError::ItemNotFound(item.to_string()));
    };

    match item {
        ItemName::HealingPotion => {
            let (min, max) = GameConfig::POTION_HEAL_RANGE;
            let healed = state.heal(rng.range_u32(min, max));
            state.inventory.consume_one(index);
            Ok(UseItemOutcome {
                item,
                healed,
                health: state.health,
            })
        }
        _ => Err(EngineError::NoEffect(item)),
    }
}

/// Equip an owned item. Equipping replaces whatever was equipped before;
/// there is no unequip.
pub fn equip(state: &mut CharacterState, item: ItemName) -> Result<EquipOutcome, EngineError> {
    if !state.inventory.owns(item) {
        return Err(EngineError::ItemNotOwned(item.to_string()));
    }
    state.equipped_item = Some(item);
    Ok(EquipOutcome { equipped: item })
}
