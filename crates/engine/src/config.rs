//! Tunable policy constants, separated from the mechanisms that apply them.
//!
//! Every probability threshold, damage range, and reward table lives here so
//! the action modules stay pure mechanism. Ranges are inclusive on both ends.

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Cumulative movement-event bands checked in order against one uniform
    /// draw in `[0, 1)`: ambush, then found-item, then trap.
    pub ambush_band: f64,
    pub found_item_band: f64,
    pub trap_band: f64,

    /// Probability that a `run` action leaves combat.
    pub escape_chance: f64,

    /// Probability that a defeated monster drops a treasure item.
    pub loot_chance: f64,
}

impl GameConfig {
    // ===== character creation =====
    pub const STARTING_HEALTH: u32 = 20;
    pub const DEFAULT_DUNGEON_SIZE_RANGE: (u32, u32) = (4, 6);

    // ===== dungeon generation =====
    /// Relative weights for empty/monster/treasure/trap rooms.
    pub const ROOM_WEIGHTS: [u32; 4] = [50, 30, 12, 8];
    /// Stat multiplier table for seeded monsters; one entry is drawn
    /// uniformly, so a quarter of monsters spawn as doubled "elites".
    pub const ELITE_MULTIPLIERS: [u32; 4] = [1, 1, 1, 2];
    pub const TREASURE_AMOUNT_RANGE: (u32, u32) = (1, 5);
    pub const SEEDED_TRAP_DAMAGE_RANGE: (u32, u32) = (1, 6);

    // ===== movement events =====
    pub const AMBUSH_GOBLIN_HP_RANGE: (u32, u32) = (6, 10);
    pub const AMBUSH_GOBLIN_ATTACK: u32 = 3;
    pub const MOVE_TRAP_DAMAGE_RANGE: (u32, u32) = (2, 5);

    // ===== boss encounter =====
    /// Minimum level before the bottom-right corner wakes the boss.
    pub const BOSS_LEVEL_GATE: u32 = 5;
    pub const BOSS_NAME: &'static str = "Dungeon Warden";
    pub const BOSS_HP: i32 = 35;
    pub const BOSS_ATTACK: u32 = 6;

    // ===== combat =====
    /// Player base damage die, before level and weapon bonuses.
    pub const PLAYER_DAMAGE_RANGE: (u32, u32) = (1, 4);
    pub const RUSTY_SWORD_BONUS: u32 = 2;
    /// Experience granted by monsters that carry no reward of their own
    /// (ambush spawns, the boss).
    pub const DEFAULT_EXP_REWARD: u32 = 5;

    // ===== progression =====
    /// Experience needed for the next level is `level * LEVEL_UP_STEP`.
    pub const LEVEL_UP_STEP: u32 = 20;
    pub const LEVEL_UP_HEALTH_GAIN: u32 = 5;
    pub const RESPAWN_EXP_PENALTY: u32 = 5;
    pub const POTION_HEAL_RANGE: (u32, u32) = (4, 8);

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_AMBUSH_BAND: f64 = 0.35;
    pub const DEFAULT_FOUND_ITEM_BAND: f64 = 0.55;
    pub const DEFAULT_TRAP_BAND: f64 = 0.70;
    pub const DEFAULT_ESCAPE_CHANCE: f64 = 0.6;
    pub const DEFAULT_LOOT_CHANCE: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            ambush_band: Self::DEFAULT_AMBUSH_BAND,
            found_item_band: Self::DEFAULT_FOUND_ITEM_BAND,
            trap_band: Self::DEFAULT_TRAP_BAND,
            escape_chance: Self::DEFAULT_ESCAPE_CHANCE,
            loot_chance: Self::DEFAULT_LOOT_CHANCE,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Flavor lines for moves where nothing happens.
pub const AMBIENCE_LINES: [&str; 4] = [
    "You hear dripping water...",
    "A distant growl echoes...",
    "Dust falls from the ceiling...",
    "You feel like you are being watched...",
];
