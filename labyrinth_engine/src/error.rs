//! Domain errors raised by the engine.
//!
//! Everything the player can trigger is recoverable: handlers report these to the
//! `View` and the loop carries on. Loader and I/O failures travel as `anyhow` errors.

use thiserror::Error;

use crate::room::Direction;

/// Recoverable game-rule failures and lookups that came up empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no exit {direction} from '{room}'")]
    NoSuchExit { room: String, direction: String },
    #[error("no item matching '{0}' here")]
    NoSuchItem(String),
    #[error("unrecognized command '{0}'")]
    InvalidCommand(String),
    #[error("room '{room}' has an exit '{direction}' that is not a compass direction")]
    InvalidExit { room: String, direction: String },
    #[error("no room named '{0}' in the labyrinth")]
    UnknownRoom(String),
    #[error("the puzzle bank has no puzzles")]
    EmptyPuzzleBank,
}

impl GameError {
    /// Convenience constructor for a blocked move.
    pub fn no_exit(room: &str, direction: Direction) -> Self {
        GameError::NoSuchExit {
            room: room.to_string(),
            direction: direction.to_string(),
        }
    }
}
