#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const LABYRINTH_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod assigner;
pub mod command;
pub mod config;
pub mod data_paths;
pub mod error;
pub mod loader;
pub mod outcome;
pub mod puzzle;
pub mod repl;
pub mod room;
pub mod session;
pub mod state;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use config::GameConfig;
pub use error::GameError;
pub use loader::load_world;
pub use outcome::{GameEnd, Outcome};
pub use puzzle::{Puzzle, PuzzleBank};
pub use repl::{InputEvent, InputManager, InputSource, ScriptedInput, run_repl};
pub use room::{Direction, Room, RoomGraph};
pub use session::{PuzzleSession, SessionState, SessionStep};
pub use view::{ConsoleOutput, OutputSink, Transcript, View, ViewItem};
pub use world::LabyrinthWorld;
