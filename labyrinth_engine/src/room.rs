//! Room definitions and the static room graph.
//!
//! The graph's topology never changes after construction. Only each room's item and
//! puzzle slots are mutated, as items are collected and puzzles rerolled.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use labyrinth_data::WorldDef;

use crate::error::GameError;
use crate::puzzle::Puzzle;

/// Room names are used directly as identifiers.
pub type RoomId = String;

/// The four compass directions an exit can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    /// Parses a direction token, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Direction::ALL
            .into_iter()
            .find(|dir| dir.as_str() == token)
            .ok_or_else(|| GameError::InvalidCommand(format!("go {token}")))
    }
}

/// A location in the labyrinth.
///
/// Invariant: `puzzle` is `Some` exactly when `item` is `Some` (once puzzles have been assigned).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: RoomId,
    pub exits: HashMap<Direction, RoomId>,
    pub item: Option<String>,
    pub puzzle: Option<Puzzle>,
}

impl Room {
    pub fn new(name: impl Into<RoomId>) -> Self {
        Self {
            name: name.into(),
            exits: HashMap::new(),
            item: None,
            puzzle: None,
        }
    }

    /// Builder-style helper for wiring exits.
    #[must_use]
    pub fn with_exit(mut self, direction: Direction, to: impl Into<RoomId>) -> Self {
        self.exits.insert(direction, to.into());
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }
}

/// All rooms in declaration order, plus the designated start and final rooms.
#[derive(Debug, Clone)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    index: HashMap<RoomId, usize>,
    start: RoomId,
    final_room: RoomId,
    total_items: usize,
}

impl RoomGraph {
    /// Build a graph from rooms in their declared order.
    ///
    /// # Errors
    /// - `UnknownRoom` if the start room, the final room or an exit destination is not among `rooms`
    pub fn new(rooms: Vec<Room>, start: impl Into<RoomId>, final_room: impl Into<RoomId>) -> Result<Self, GameError> {
        let index: HashMap<RoomId, usize> = rooms.iter().enumerate().map(|(i, r)| (r.name.clone(), i)).collect();
        let start = start.into();
        let final_room = final_room.into();

        for name in [&start, &final_room] {
            if !index.contains_key(name) {
                return Err(GameError::UnknownRoom(name.clone()));
            }
        }
        if let Some(bad) = rooms
            .iter()
            .flat_map(|room| room.exits.values())
            .find(|to| !index.contains_key(*to))
        {
            return Err(GameError::UnknownRoom(bad.clone()));
        }

        let total_items = rooms.iter().filter(|room| room.item.is_some()).count();
        Ok(Self {
            rooms,
            index,
            start,
            final_room,
            total_items,
        })
    }

    /// Build the graph described by a (validated) `WorldDef`.
    ///
    /// # Errors
    /// - `InvalidExit` for an exit key that is not a compass direction
    /// - `UnknownRoom` as for [`RoomGraph::new`]
    pub fn from_def(def: &WorldDef) -> Result<Self, GameError> {
        let mut rooms = Vec::with_capacity(def.rooms.len());
        for room_def in &def.rooms {
            let mut room = Room::new(room_def.name.clone());
            room.item.clone_from(&room_def.item);
            for (token, to) in &room_def.exits {
                let direction = token.parse::<Direction>().map_err(|_| GameError::InvalidExit {
                    room: room_def.name.clone(),
                    direction: token.clone(),
                })?;
                room.exits.insert(direction, to.clone());
            }
            rooms.push(room);
        }
        RoomGraph::new(rooms, def.game.start_room.clone(), def.game.final_room.clone())
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn final_room(&self) -> &str {
        &self.final_room
    }

    /// Number of collectible items in the world, fixed at construction.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Names of rooms still holding an item, in declaration order.
    pub fn rooms_with_items(&self) -> Vec<RoomId> {
        self.rooms
            .iter()
            .filter(|room| room.item.is_some())
            .map(|room| room.name.clone())
            .collect()
    }

    /// # Errors
    /// - `UnknownRoom` if no room has this name
    pub fn room(&self, name: &str) -> Result<&Room, GameError> {
        self.index
            .get(name)
            .map(|&i| &self.rooms[i])
            .ok_or_else(|| GameError::UnknownRoom(name.to_string()))
    }

    /// # Errors
    /// - `UnknownRoom` if no room has this name
    pub fn room_mut(&mut self, name: &str) -> Result<&mut Room, GameError> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.rooms[i]),
            None => Err(GameError::UnknownRoom(name.to_string())),
        }
    }

    /// Look up the neighbor of `room` in `direction`.
    ///
    /// # Errors
    /// - `NoSuchExit` if the room has no exit that way
    /// - `UnknownRoom` if `room` is not in the graph
    pub fn resolve_exit(&self, room: &str, direction: Direction) -> Result<&str, GameError> {
        self.room(room)?
            .exits
            .get(&direction)
            .map(String::as_str)
            .ok_or_else(|| GameError::no_exit(room, direction))
    }

    /// The item currently lying in `room`, if any.
    pub fn item_at(&self, room: &str) -> Option<&str> {
        self.room(room).ok().and_then(|r| r.item.as_deref())
    }

    /// Clear a room's item and puzzle after collection, returning the item.
    ///
    /// # Errors
    /// - `UnknownRoom` if `room` is not in the graph
    pub fn remove_item(&mut self, room: &str) -> Result<Option<String>, GameError> {
        let room = self.room_mut(room)?;
        room.puzzle = None;
        Ok(room.item.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_graph() -> RoomGraph {
        let rooms = vec![
            Room::new("Hall").with_exit(Direction::East, "Vault"),
            Room::new("Vault")
                .with_exit(Direction::West, "Hall")
                .with_exit(Direction::South, "Exit")
                .with_item("Gem"),
            Room::new("Exit"),
        ];
        RoomGraph::new(rooms, "Hall", "Exit").unwrap()
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!(" North ".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("west".parse::<Direction>().unwrap(), Direction::West);
        assert!("up".parse::<Direction>().is_err());
        assert!("item".parse::<Direction>().is_err());
    }

    #[test]
    fn resolve_exit_follows_declared_exits() {
        let graph = small_graph();
        assert_eq!(graph.resolve_exit("Hall", Direction::East).unwrap(), "Vault");
        assert_eq!(graph.resolve_exit("Vault", Direction::South).unwrap(), "Exit");
    }

    #[test]
    fn exits_need_not_be_symmetric() {
        let graph = small_graph();
        assert_eq!(
            graph.resolve_exit("Exit", Direction::North),
            Err(GameError::NoSuchExit {
                room: "Exit".into(),
                direction: "north".into()
            })
        );
    }

    #[test]
    fn total_items_counted_at_construction() {
        let mut graph = small_graph();
        assert_eq!(graph.total_items(), 1);
        assert_eq!(graph.remove_item("Vault").unwrap().as_deref(), Some("Gem"));
        assert_eq!(graph.total_items(), 1);
        assert!(graph.item_at("Vault").is_none());
        assert!(graph.rooms_with_items().is_empty());
    }

    #[test]
    fn remove_item_clears_puzzle_too() {
        let mut graph = small_graph();
        graph.room_mut("Vault").unwrap().puzzle = Some(Puzzle::new("q", "a"));
        graph.remove_item("Vault").unwrap();
        assert!(graph.room("Vault").unwrap().puzzle.is_none());
    }

    #[test]
    fn construction_rejects_dangling_references() {
        let rooms = vec![Room::new("A").with_exit(Direction::North, "B")];
        assert_eq!(RoomGraph::new(rooms, "A", "A").unwrap_err(), GameError::UnknownRoom("B".into()));
        let rooms = vec![Room::new("A")];
        assert_eq!(RoomGraph::new(rooms, "A", "Z").unwrap_err(), GameError::UnknownRoom("Z".into()));
    }

    #[test]
    fn from_def_reports_bad_exit_key_as_data_error() {
        let def = WorldDef {
            game: labyrinth_data::GameDef {
                start_room: "A".into(),
                final_room: "A".into(),
                ..labyrinth_data::GameDef::default()
            },
            rooms: vec![labyrinth_data::RoomDef {
                name: "A".into(),
                exits: [("up".to_string(), "A".to_string())].into(),
                item: None,
            }],
            puzzles: Vec::new(),
        };
        let err = RoomGraph::from_def(&def).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidExit {
                room: "A".into(),
                direction: "up".into()
            }
        );
        assert_eq!(err.to_string(), "room 'A' has an exit 'up' that is not a compass direction");
    }
}
