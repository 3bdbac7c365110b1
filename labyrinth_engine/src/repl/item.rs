//! `repl::item` module
//!
//! Contains the handler for collecting items.

use anyhow::Result;
use log::{info, warn};

use crate::repl::input::InputSource;
use crate::repl::puzzle::puzzle_handler;
use crate::view::{OutputSink, View, ViewItem};
use crate::world::LabyrinthWorld;

/// Try to collect `requested` from the current room.
///
/// The name must match the room's item exactly (case-insensitive). Collection runs the
/// room's puzzle first; the item moves to the inventory only if it is solved.
///
/// # Errors
/// - propagated from the puzzle session (terminal I/O, missing room)
pub fn get_handler(
    world: &mut LabyrinthWorld,
    view: &mut View,
    input: &mut dyn InputSource,
    output: &mut dyn OutputSink,
    requested: &str,
) -> Result<()> {
    let item = match world.requested_item(requested) {
        Ok(item) => item,
        Err(err) => {
            info!("{err} (player in {})", world.state.location);
            view.push(ViewItem::NoSuchItem(requested.to_string()));
            return Ok(());
        },
    };

    if !puzzle_handler(world, view, input, output)? {
        view.push(ViewItem::PuzzleRequired);
        return Ok(());
    }

    let here = world.state.location.clone();
    let Some(taken) = world.rooms.remove_item(&here)? else {
        info!("{item} vanished from {here} before it could be collected");
        return Ok(());
    };
    if world.state.collect(taken.clone()) {
        info!(
            "player collected {taken} in {here} ({}/{})",
            world.state.inventory.len(),
            world.total_items()
        );
        view.push(ViewItem::ItemCollected(taken));
    } else {
        warn!("{taken} taken from {here} was already in the inventory");
    }
    Ok(())
}
