//! Error types surfaced by engine operations.
//!
//! Every failure is a tagged value returned to the caller; the engine holds
//! no external resources, so there is no cleanup path and no panicking
//! branch. The boundary layer translates these into user-facing responses
//! (an unknown character identifier is a boundary failure and lives there).

use crate::state::ItemName;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    /// Input that does not parse into a known direction or action.
    #[error("unrecognized input: {0}")]
    InvalidInput(String),

    /// Operation not legal in the current state (combat action with no
    /// active battle, respawn while alive).
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// No inventory entry with a positive count matches the name.
    ///
    /// Carries the name as text: a name outside the item vocabulary can
    /// never be in an inventory, so the boundary reports it the same way
    /// as a known-but-absent item.
    #[error("item {0} not in inventory")]
    ItemNotFound(String),

    /// Equip target is not owned. Text for the same reason as
    /// [`EngineError::ItemNotFound`].
    #[error("item {0} not owned")]
    ItemNotOwned(String),

    /// The item exists in the inventory but has no defined use.
    #[error("item {0} has no use yet")]
    NoEffect(ItemName),
}
