//! Data structures representing the running game.
//!
//! [`LabyrinthWorld`] owns everything that changes during play. It is built once by the
//! loader and then passed by `&mut` into every handler; nothing lives in globals.

use labyrinth_data::WorldDef;
use log::info;

use crate::assigner::assign_all;
use crate::command::names_item;
use crate::error::GameError;
use crate::puzzle::{Puzzle, PuzzleBank};
use crate::room::{Room, RoomGraph};
use crate::state::GameState;

/// Default number of wrong answers before a new puzzle is offered.
pub const DEFAULT_REROLL_THRESHOLD: usize = 3;

/// Text shown around the game rather than during it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameText {
    pub title: String,
    pub intro: Vec<String>,
    pub victory: Vec<String>,
    pub defeat: Vec<String>,
}

/// Complete state of a game in progress.
#[derive(Debug, Clone)]
pub struct LabyrinthWorld {
    pub rooms: RoomGraph,
    pub bank: PuzzleBank,
    pub state: GameState,
    pub text: GameText,
    pub reroll_threshold: usize,
    pub turn_count: usize,
}

impl LabyrinthWorld {
    /// Assemble a world and hand out the opening puzzles.
    ///
    /// # Errors
    /// - `UnknownRoom` if puzzle assignment targets a room missing from the graph
    pub fn new(mut rooms: RoomGraph, mut bank: PuzzleBank, text: GameText) -> Result<Self, GameError> {
        let assigned = assign_all(&mut rooms, &mut bank)?;
        info!("{assigned} puzzles assigned from a bank of {}", bank.len());
        let state = GameState::new(rooms.start());
        Ok(Self {
            rooms,
            bank,
            state,
            text,
            reroll_threshold: DEFAULT_REROLL_THRESHOLD,
            turn_count: 0,
        })
    }

    /// Build a world from definition data, shuffling the bank with `seed`.
    ///
    /// # Errors
    /// - on a malformed graph or an empty puzzle bank
    pub fn from_def(def: &WorldDef, seed: Option<u64>) -> Result<Self, GameError> {
        let rooms = RoomGraph::from_def(def)?;
        let bank = PuzzleBank::with_seed(def.puzzles.iter().map(Puzzle::from).collect(), seed)?;
        let text = GameText {
            title: def.game.title.clone(),
            intro: def.game.intro.clone(),
            victory: def.game.victory.clone(),
            defeat: def.game.defeat.clone(),
        };
        LabyrinthWorld::new(rooms, bank, text)
    }

    /// The room the player is standing in.
    ///
    /// # Errors
    /// - `UnknownRoom` if the player's location is not in the graph
    pub fn player_room(&self) -> Result<&Room, GameError> {
        self.rooms.room(&self.state.location)
    }

    /// The item visible in the player's current room, if any.
    pub fn visible_item(&self) -> Option<&str> {
        self.rooms.item_at(&self.state.location)
    }

    /// The item in the player's room, provided `requested` names it.
    ///
    /// # Errors
    /// - `NoSuchItem` if the room is empty or holds something else
    pub fn requested_item(&self, requested: &str) -> Result<String, GameError> {
        self.visible_item()
            .filter(|item| names_item(requested, item))
            .map(str::to_string)
            .ok_or_else(|| GameError::NoSuchItem(requested.to_string()))
    }

    /// Number of collectible items in the world, independent of how many remain.
    pub fn total_items(&self) -> usize {
        self.rooms.total_items()
    }
}
