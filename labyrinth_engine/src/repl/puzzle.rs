//! `repl::puzzle` module
//!
//! Drives a [`PuzzleSession`] from terminal input. The session runs its own sub-loop:
//! the main loop is suspended until the puzzle is solved or abandoned.

use anyhow::{Context, Result};
use log::info;

use crate::repl::input::{InputEvent, InputSource};
use crate::session::{PuzzleSession, SessionState, SessionStep};
use crate::view::{OutputSink, View, ViewItem};
use crate::world::LabyrinthWorld;

pub const ANSWER_PROMPT: &str = "Your answer: ";
pub const REROLL_PROMPT: &str = "Would you like a new question? (yes/no): ";

/// Run the puzzle guarding the player's current room.
///
/// Returns `true` if the item may be collected: the puzzle was solved, or the room has
/// no puzzle at all. End of input or Ctrl-C abandons the puzzle.
///
/// # Errors
/// - on a failed read or write of the terminal
/// - if the player's room is missing from the graph
pub fn puzzle_handler(
    world: &mut LabyrinthWorld,
    view: &mut View,
    input: &mut dyn InputSource,
    output: &mut dyn OutputSink,
) -> Result<bool> {
    let here = world.state.location.clone();
    let Some(mut session) = PuzzleSession::begin(&world.rooms, &here, world.reroll_threshold)? else {
        info!("no puzzle guards the item in {here}");
        return Ok(true);
    };
    view.push(ViewItem::PuzzlePresented(session.puzzle().question.clone()));

    loop {
        view.flush(output).context("while writing puzzle output")?;
        let prompt = match session.state() {
            SessionState::ConfirmReroll => REROLL_PROMPT,
            _ => ANSWER_PROMPT,
        };
        let reply = match input.read_line(&view.prompt(prompt)).context("while reading puzzle answer")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof | InputEvent::Interrupted => {
                info!("puzzle in {here} abandoned by end of input");
                view.push(ViewItem::PuzzleAbandoned);
                return Ok(false);
            },
        };

        match session.advance(&reply, &mut world.rooms, &mut world.bank)? {
            SessionStep::Solved => {
                view.push(ViewItem::PuzzleSolved);
                return Ok(true);
            },
            SessionStep::Abandoned => {
                view.push(ViewItem::PuzzleAbandoned);
                return Ok(false);
            },
            SessionStep::WrongAnswer(_) | SessionStep::OfferReroll(_) => view.push(ViewItem::PuzzleIncorrect),
            SessionStep::Rerolled(puzzle) => view.push(ViewItem::NewPuzzle(puzzle.question)),
            SessionStep::RerollDeclined => {},
        }
    }
}
