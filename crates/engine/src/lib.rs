//! Deterministic dungeon-crawl game logic shared across hosts.
//!
//! `delve-engine` defines the canonical rules of the crawl: dungeon
//! generation, movement and event resolution, combat resolution, and level
//! progression. Every operation is a pure function from
//! `(state, input, random draws)` to `(new state, outcome)` — the engine
//! performs no I/O, keeps no ambient randomness, and never logs. Hosting
//! layers (see `delve-runtime`) load a [`CharacterState`], invoke one
//! operation, and persist the result.
pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod view;

mod dungeon_gen;

pub use action::{
    available_moves, equip, move_character, resolve_combat, respawn, use_item, CombatAction,
    CombatOutcome, Direction, EquipOutcome, MoveEvent, MoveOutcome, RespawnOutcome,
    UseItemOutcome,
};
pub use config::GameConfig;
pub use dungeon_gen::generate_dungeon;
pub use error::EngineError;
pub use rng::{PcgRandom, RandomSource, ScriptedSource};
pub use state::{
    CharacterState, Cell, Dungeon, Inventory, ItemName, ItemStack, Monster, Position, RoomKind,
};
pub use view::{ascii_map, StatusView};
