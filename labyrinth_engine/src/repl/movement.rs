//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use anyhow::{Context, Result};
use log::info;

use crate::error::GameError;
use crate::room::Direction;
use crate::view::{View, ViewItem};
use crate::world::LabyrinthWorld;

/// Move the player to the neighboring room in `input_dir`, if there is one.
///
/// Returns `true` when the player actually moved. An unknown direction is reported the
/// same way as a missing exit.
///
/// # Errors
/// - if the player's current room is missing from the graph
pub fn move_to_handler(world: &mut LabyrinthWorld, view: &mut View, input_dir: &str) -> Result<bool> {
    let Ok(direction) = input_dir.parse::<Direction>() else {
        info!("player tried to go \"{input_dir}\", which is not a direction");
        view.push(ViewItem::NoSuchExit(input_dir.to_string()));
        return Ok(false);
    };

    let leaving = world.state.location.clone();
    match world.rooms.resolve_exit(&leaving, direction) {
        Ok(destination) => {
            info!("player moved {direction} from {leaving} to {destination}");
            world.state.location = destination.to_string();
            Ok(true)
        },
        Err(GameError::NoSuchExit { .. }) => {
            info!("no exit {direction} from {leaving}");
            view.push(ViewItem::NoSuchExit(direction.to_string()));
            Ok(false)
        },
        Err(err) => Err(err).with_context(|| format!("while moving {direction} from {leaving}")),
    }
}
