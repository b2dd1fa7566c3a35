//! Engine operations: the only code that mutates [`CharacterState`].
//!
//! [`CharacterState`]: crate::state::CharacterState

mod combat;
mod movement;
mod progression;

pub use combat::{resolve_combat, CombatOutcome};
pub use movement::{available_moves, move_character, MoveEvent, MoveOutcome};
pub use progression::{
    apply_level_ups, equip, respawn, use_item, EquipOutcome, RespawnOutcome, UseItemOutcome,
};

/// The four cardinal directions a character can walk.
///
/// Deltas use screen-style coordinates: north decreases `y`, south
/// increases it. The boundary layer parses raw direction strings with
/// [`std::str::FromStr`]; an unparseable direction never reaches the
/// movement engine.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit step in grid coordinates.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// What a character can do while a battle is active.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CombatAction {
    Attack,
    Run,
}
