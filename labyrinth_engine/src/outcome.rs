//! End-of-game evaluation.
//!
//! Checked after every successful move. Stepping into the final room always ends the
//! game; the inventory decides which way.

use log::info;

use crate::world::LabyrinthWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// How a call to `run_repl` finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Quit,
    Over(Outcome),
}

/// Returns the terminal outcome if the player now stands in the final room.
pub fn evaluate(world: &LabyrinthWorld) -> Option<Outcome> {
    if world.state.location != world.rooms.final_room() {
        return None;
    }
    let held = world.state.inventory.len();
    let needed = world.total_items();
    let outcome = if held == needed { Outcome::Victory } else { Outcome::Defeat };
    info!("entered {} holding {held}/{needed} items: {outcome:?}", world.rooms.final_room());
    Some(outcome)
}
