//! Procedural dungeon generation.

use crate::config::GameConfig;
use crate::rng::RandomSource;
use crate::state::{Cell, Dungeon, ItemName, Monster, RoomKind};

/// Base monster templates seeded into monster rooms: (name, hp, attack, exp).
const MONSTER_TEMPLATES: [(&str, i32, u32, u32); 3] = [
    ("Goblin", 6, 2, 5),
    ("Skeleton", 8, 3, 8),
    ("Orc", 12, 4, 14),
];

/// Generate a `size x size` dungeon with randomized room content.
///
/// Room types are drawn from the weighted distribution in
/// [`GameConfig::ROOM_WEIGHTS`], biased towards empty rooms. Monster rooms
/// pick a template uniformly and may scale into a doubled elite variant;
/// treasure rooms roll an item and an amount; trap rooms roll a damage
/// value. Whatever the dice said, cell `(0, 0)` is overwritten to an
/// empty, visited entrance afterwards, so generation cannot fail and the
/// entry point is always safe.
pub fn generate_dungeon(size: u32, rng: &mut impl RandomSource) -> Dungeon {
    let mut grid = Vec::with_capacity(size as usize);
    for _ in 0..size {
        let mut row = Vec::with_capacity(size as usize);
        for _ in 0..size {
            row.push(Cell::new(roll_room(rng)));
        }
        grid.push(row);
    }

    // Unconditional: the entrance is safe no matter what was rolled there.
    grid[0][0] = Cell::entrance();

    Dungeon { size, grid }
}

fn roll_room(rng: &mut impl RandomSource) -> RoomKind {
    match rng.weighted_index(&GameConfig::ROOM_WEIGHTS) {
        0 => RoomKind::Empty,
        1 => RoomKind::Monster(roll_monster(rng)),
        2 => {
            let table = ItemName::treasure_table();
            let item = table[rng.index(table.len())];
            let (min, max) = GameConfig::TREASURE_AMOUNT_RANGE;
            RoomKind::Treasure {
                item,
                amount: rng.range_u32(min, max),
            }
        }
        _ => {
            let (min, max) = GameConfig::SEEDED_TRAP_DAMAGE_RANGE;
            RoomKind::Trap {
                damage: rng.range_u32(min, max),
            }
        }
    }
}

fn roll_monster(rng: &mut impl RandomSource) -> Monster {
    let (name, hp, attack, exp) = MONSTER_TEMPLATES[rng.index(MONSTER_TEMPLATES.len())];
    let multiplier =
        GameConfig::ELITE_MULTIPLIERS[rng.index(GameConfig::ELITE_MULTIPLIERS.len())];
    Monster::new(
        name,
        hp * multiplier as i32,
        attack * multiplier,
        exp * multiplier,
    )
}
