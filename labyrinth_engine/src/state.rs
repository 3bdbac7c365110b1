//! Mutable player-side state: where the player stands and what they carry.

use crate::room::RoomId;

/// The player's position and collected items.
///
/// `location` only changes through a validated move; `inventory` only grows, in collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub location: RoomId,
    pub inventory: Vec<String>,
}

impl GameState {
    /// Fresh state at the start room with empty pockets.
    pub fn new(start: impl Into<RoomId>) -> Self {
        Self {
            location: start.into(),
            inventory: Vec::new(),
        }
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|held| held == item)
    }

    /// Record a collected item. Returns false if it was already held.
    pub fn collect(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.has_item(&item) {
            return false;
        }
        self.inventory.push(item);
        true
    }
}
