//! Dungeon grid, cells, and monsters.

use std::fmt;

use crate::config::GameConfig;
use crate::state::ItemName;

/// Discrete grid position expressed in cell coordinates.
///
/// Signed so that direction deltas can step past an edge; the dungeon's
/// bounds check rejects such targets before any mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The dungeon entrance. Always a safe, already-explored empty cell.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A monster in its normalized internal representation.
///
/// Dungeon-seeded monsters carry `name/hp/atk/exp`; monsters rolled during
/// movement carry only `name/hp/attack`. Both shapes deserialize into this
/// one struct: `atk` is an accepted alias and a missing reward falls back
/// to the fixed default, so the combat resolver never special-cases the
/// monster's origin.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub name: String,

    /// Current hit points, mutable during combat. Signed: a strong blow
    /// drives it below zero before the kill check reads it.
    pub hp: i32,

    /// Damage die ceiling for this monster's strikes.
    #[cfg_attr(feature = "serde", serde(alias = "atk"))]
    pub attack: u32,

    /// Experience granted on kill.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "exp", default = "default_exp_reward")
    )]
    pub exp_reward: u32,
}

#[cfg(feature = "serde")]
fn default_exp_reward() -> u32 {
    GameConfig::DEFAULT_EXP_REWARD
}

impl Monster {
    pub fn new(name: impl Into<String>, hp: i32, attack: u32, exp_reward: u32) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
            exp_reward,
        }
    }

    /// Goblin rolled by a movement ambush. Carries the default reward.
    pub fn ambush_goblin(hp: i32) -> Self {
        Self::new(
            "Goblin",
            hp,
            GameConfig::AMBUSH_GOBLIN_ATTACK,
            GameConfig::DEFAULT_EXP_REWARD,
        )
    }

    /// The fixed boss guarding the bottom-right corner.
    pub fn warden() -> Self {
        Self::new(
            GameConfig::BOSS_NAME,
            GameConfig::BOSS_HP,
            GameConfig::BOSS_ATTACK,
            GameConfig::DEFAULT_EXP_REWARD,
        )
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

/// What a cell contains. A tagged variant per room type: a trap cell
/// cannot also carry a monster payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoomKind {
    Empty,
    Monster(Monster),
    Treasure { item: ItemName, amount: u32 },
    Trap { damage: u32 },
}

/// One grid cell: its room content plus whether the character has seen it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind: RoomKind,
    pub visited: bool,
}

impl Cell {
    pub fn new(kind: RoomKind) -> Self {
        Self {
            kind,
            visited: false,
        }
    }

    /// The guaranteed entry cell: empty and already explored.
    pub fn entrance() -> Self {
        Self {
            kind: RoomKind::Empty,
            visited: true,
        }
    }
}

/// A square grid of cells the character explores.
///
/// Row-major: `grid[y][x]`. Invariant: `grid[0][0]` is empty and visited
/// from the moment of generation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dungeon {
    pub size: u32,
    pub grid: Vec<Vec<Cell>>,
}

impl Dungeon {
    /// Whether a position lies inside the grid on both axes.
    pub fn contains(&self, pos: Position) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(&self.grid[pos.y as usize][pos.x as usize])
    }

    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(&mut self.grid[pos.y as usize][pos.x as usize])
    }

    /// The bottom-right corner where the boss waits.
    pub fn boss_corner(&self) -> Position {
        Position::new(self.size as i32 - 1, self.size as i32 - 1)
    }
}
