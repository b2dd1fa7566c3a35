//! Read-only projections of [`CharacterState`] for display.
//!
//! Nothing here reveals unexplored room contents: the map shows only where
//! the character has been, and the status view carries the visited mask
//! rather than the grid itself.

use crate::state::{CharacterState, Inventory, Monster, Position};

/// Snapshot of a character for status reporting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusView {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub exp: u32,
    pub health: u32,
    pub max_health: u32,
    pub inventory: Inventory,
    pub position: Position,
    pub dungeon_size: u32,
    /// Visited mask in row-major order, `visited[y][x]`.
    pub visited: Vec<Vec<bool>>,
    pub in_battle: bool,
    /// Present only while a battle is active.
    pub monster: Option<Monster>,
}

impl StatusView {
    pub fn of(state: &CharacterState) -> Self {
        Self {
            id: state.id.clone(),
            name: state.name.clone(),
            level: state.level,
            exp: state.exp,
            health: state.health,
            max_health: state.max_health,
            inventory: state.inventory.clone(),
            position: state.position,
            dungeon_size: state.dungeon.size,
            visited: state
                .dungeon
                .grid
                .iter()
                .map(|row| row.iter().map(|cell| cell.visited).collect())
                .collect(),
            in_battle: state.in_battle(),
            monster: state.current_monster.clone(),
        }
    }
}

/// Render the explored map as ASCII art.
///
/// `P` marks the character, `.` a visited cell, `#` an unexplored one.
/// Cells within a row are space-separated and rows are newline-separated,
/// top row first.
pub fn ascii_map(state: &CharacterState) -> String {
    let mut rows = Vec::with_capacity(state.dungeon.grid.len());
    for (y, row) in state.dungeon.grid.iter().enumerate() {
        let cells: Vec<&str> = row
            .iter()
            .enumerate()
            .map(|(x, cell)| {
                if state.position == Position::new(x as i32, y as i32) {
                    "P"
                } else if cell.visited {
                    "."
                } else {
                    "#"
                }
            })
            .collect();
        rows.push(cells.join(" "));
    }
    rows.join("\n")
}
