//! Movement resolution: boundary checks, the boss trigger, and random
//! encounters.

use crate::action::Direction;
use crate::config::{GameConfig, AMBIENCE_LINES};
use crate::rng::RandomSource;
use crate::state::{CharacterState, ItemName, Monster, Position};

/// What happened when the character stepped (or failed to step).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "event"))]
pub enum MoveEvent {
    /// The target cell lies outside the grid; nothing changed.
    Blocked,
    /// The bottom-right corner woke the Dungeon Warden.
    BossAwakened { monster: Monster },
    /// A monster jumped out; battle has begun.
    Ambush { monster: Monster },
    /// A healing potion was added to the inventory.
    FoundItem { item: ItemName },
    /// A trap fired for `damage` health.
    TrapTriggered { damage: u32 },
    /// Nothing happened; purely cosmetic flavor.
    Ambience { line: String },
}

/// Outcome of one movement action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    pub moved: bool,
    pub event: MoveEvent,
    /// Directions that stay in bounds from the character's position after
    /// this action.
    pub available_moves: Vec<Direction>,
}

/// Directions whose target stays inside the grid from the current
/// position. Pure function of position and dungeon size.
pub fn available_moves(state: &CharacterState) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|direction| {
            let (dx, dy) = direction.delta();
            state
                .dungeon
                .contains(Position::new(state.position.x + dx, state.position.y + dy))
        })
        .collect()
}

/// Resolve one directional move.
///
/// A move against the grid edge mutates nothing. Otherwise the character
/// steps, the target cell is marked visited, and exactly one event fires:
/// the boss check runs first (before any random draw), then a single
/// uniform draw picks between ambush, found item, trap, and ambience.
pub fn move_character(
    state: &mut CharacterState,
    direction: Direction,
    config: &GameConfig,
    rng: &mut impl RandomSource,
) -> MoveOutcome {
    let (dx, dy) = direction.delta();
    let target = Position::new(state.position.x + dx, state.position.y + dy);

    if !state.dungeon.contains(target) {
        return MoveOutcome {
            moved: false,
            event: MoveEvent::Blocked,
            available_moves: available_moves(state),
        };
    }

    state.position = target;
    if let Some(cell) = state.dungeon.cell_mut(target) {
        cell.visited = true;
    }

    // Boss rule outranks every random encounter and consumes no draw.
    if target == state.dungeon.boss_corner() && state.level >= GameConfig::BOSS_LEVEL_GATE {
        let monster = Monster::warden();
        state.current_monster = Some(monster.clone());
        return MoveOutcome {
            moved: true,
            event: MoveEvent::BossAwakened { monster },
            available_moves: available_moves(state),
        };
    }

    let roll = rng.next_f64();
    let event = if roll < config.ambush_band {
        let (min_hp, max_hp) = GameConfig::AMBUSH_GOBLIN_HP_RANGE;
        let monster = Monster::ambush_goblin(rng.range_u32(min_hp, max_hp) as i32);
        state.current_monster = Some(monster.clone());
        MoveEvent::Ambush { monster }
    } else if roll < config.found_item_band {
        state.inventory.add(ItemName::HealingPotion, 1);
        MoveEvent::FoundItem {
            item: ItemName::HealingPotion,
        }
    } else if roll < config.trap_band {
        let (min, max) = GameConfig::MOVE_TRAP_DAMAGE_RANGE;
        let damage = rng.range_u32(min, max);
        state.take_damage(damage);
        MoveEvent::TrapTriggered { damage }
    } else {
        MoveEvent::Ambience {
            line: AMBIENCE_LINES[rng.index(AMBIENCE_LINES.len())].to_string(),
        }
    };

    MoveOutcome {
        moved: true,
        event,
        available_moves: available_moves(state),
    }
}
