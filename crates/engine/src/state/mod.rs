//! Canonical game state: the character aggregate and everything it owns.

mod character;
mod dungeon;
mod inventory;

pub use character::CharacterState;
pub use dungeon::{Cell, Dungeon, Monster, Position, RoomKind};
pub use inventory::{Inventory, ItemName, ItemStack};
