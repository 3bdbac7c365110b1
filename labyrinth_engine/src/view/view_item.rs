//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which collects them and writes them
//! out in push order before the engine blocks for input. Variants carry whatever payload
//! the message needs.

use variantly::Variantly;

/// Each of the kinds of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    /// Title, objective text and the command list, shown once before play.
    Instructions { title: String, intro: Vec<String> },
    /// Where the player is, what they carry and what lies here.
    Status {
        room: String,
        inventory: Vec<String>,
        item: Option<String>,
    },
    NoSuchExit(String),
    NoSuchItem(String),
    InvalidCommand(String),
    ItemCollected(String),
    PuzzleRequired,
    PuzzlePresented(String),
    PuzzleSolved,
    PuzzleIncorrect,
    PuzzleAbandoned,
    NewPuzzle(String),
    Victory(Vec<String>),
    Defeat(Vec<String>),
    Quit,
    EngineMessage(String),
}
