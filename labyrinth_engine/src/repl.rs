//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that manipulate the [`LabyrinthWorld`].
//! Handlers push [`ViewItem`]s; the loop flushes the [`View`] before every read.

pub mod input;
pub mod item;
pub mod movement;
pub mod puzzle;
pub mod system;

pub use input::{InputEvent, InputManager, InputSource, ScriptedInput};
pub use item::*;
pub use movement::*;
pub use puzzle::*;
pub use system::*;

use anyhow::{Context, Result};
use log::info;

use crate::command::{Command, parse_command};
use crate::outcome::{GameEnd, evaluate};
use crate::view::{OutputSink, View, ViewItem};
use crate::world::LabyrinthWorld;

/// Prompt shown at the top of every turn.
pub const MOVE_PROMPT: &str = "Enter your move: ";

/// Run the main read–eval–print loop until the player quits or the game ends.
///
/// Shows the instructions once, then each turn shows the status, reads a command and
/// dispatches it. After every successful move the end condition is checked; entering
/// the final room always ends the game. End of input counts as `exit`.
///
/// # Errors
/// - on a failed read or write of the terminal
/// - if a handler finds the world inconsistent, such as a player in an unknown room
pub fn run_repl(world: &mut LabyrinthWorld, input: &mut dyn InputSource, output: &mut dyn OutputSink) -> Result<GameEnd> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    let mut view = View::new(output.styled());
    instructions_handler(world, &mut view);

    loop {
        world.turn_count += 1;
        info!("================> BEGIN TURN {} <================", world.turn_count);
        status_handler(world, &mut view);
        view.flush(output).context("while writing game output")?;

        let prompt = view.prompt(MOVE_PROMPT);
        let line = match input.read_line(&prompt).context("while reading player command")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => {
                info!("input closed; treating as exit");
                "exit".to_string()
            },
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                continue;
            },
        };

        let moved = match parse_command(&line) {
            Quit => {
                quit_handler(world, &mut view);
                view.flush(output).context("while writing game output")?;
                return Ok(GameEnd::Quit);
            },
            MoveTo(direction) => move_to_handler(world, &mut view, &direction)?,
            Get(item) => {
                get_handler(world, &mut view, input, output, &item)?;
                false
            },
            Unknown(text) => {
                invalid_command_handler(&mut view, &text);
                false
            },
        };

        if moved && let Some(outcome) = evaluate(world) {
            outcome_handler(world, &mut view, outcome);
            view.flush(output).context("while writing game output")?;
            return Ok(GameEnd::Over(outcome));
        }
    }
}
