use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Room names double as identifiers throughout a `WorldDef`.
pub type Id = String;

/// Direction tokens accepted as exit keys.
pub const DIRECTIONS: [&str; 4] = ["north", "south", "east", "west"];

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    /// Declaration order is significant: puzzles are handed to item rooms in this order.
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub puzzles: Vec<PuzzleDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: Vec<String>,
    pub start_room: Id,
    pub final_room: Id,
    #[serde(default)]
    pub victory: Vec<String>,
    #[serde(default)]
    pub defeat: Vec<String>,
}

/// A room, its exits and the item (if any) waiting in it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoomDef {
    pub name: Id,
    /// direction token -> destination room name
    #[serde(default)]
    pub exits: BTreeMap<String, Id>,
    #[serde(default)]
    pub item: Option<String>,
}

impl RoomDef {
    /// Iterate destination room names in exit order.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.exits.values().map(String::as_str)
    }
}

/// A question/answer pair from the puzzle bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDef {
    pub question: String,
    pub answer: String,
}
