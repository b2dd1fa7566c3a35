//! Inventory storage with ordered, duplicate-tolerant stacks.

use strum::IntoEnumIterator;

/// The closed item vocabulary.
///
/// Everything that can appear in an inventory comes from this set, whether
/// seeded into a treasure room, found while moving, or dropped as loot.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemName {
    GoldCoin,
    HealingPotion,
    RustySword,
    Gem,
}

impl ItemName {
    /// The treasure table: the uniform pool for treasure rooms and loot.
    pub fn treasure_table() -> Vec<ItemName> {
        ItemName::iter().collect()
    }
}

/// A named item with a positive count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub name: ItemName,
    pub count: u32,
}

impl ItemStack {
    pub fn new(name: ItemName, count: u32) -> Self {
        Self { name, count }
    }
}

/// An ordered sequence of item stacks.
///
/// Deliberately NOT a map: picking up an item appends a new stack, so
/// several stacks of the same name may coexist. Lookups match the first
/// stack with a positive count for the name, preserving the original
/// record-of-pickups semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Inventory {
    stacks: Vec<ItemStack>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh stack. Never merges into an existing one.
    pub fn add(&mut self, name: ItemName, count: u32) {
        self.stacks.push(ItemStack::new(name, count));
    }

    /// Index of the first stack with a positive count for `name`.
    pub fn find(&self, name: ItemName) -> Option<usize> {
        self.stacks
            .iter()
            .position(|stack| stack.name == name && stack.count > 0)
    }

    pub fn owns(&self, name: ItemName) -> bool {
        self.find(name).is_some()
    }

    /// Decrement the stack at `idx`, dropping it once it empties.
    ///
    /// `idx` must come from [`Inventory::find`]; out-of-range indices are
    /// ignored.
    pub fn consume_one(&mut self, idx: usize) {
        let Some(stack) = self.stacks.get_mut(idx) else {
            return;
        };
        stack.count = stack.count.saturating_sub(1);
        if stack.count == 0 {
            self.stacks.remove(idx);
        }
    }

    pub fn as_slice(&self) -> &[ItemStack] {
        &self.stacks
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}
