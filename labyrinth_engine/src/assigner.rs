//! Puzzle assignment.
//!
//! Both operations pull exactly one puzzle from the bank per room served.

use log::info;

use crate::error::GameError;
use crate::puzzle::{Puzzle, PuzzleBank};
use crate::room::RoomGraph;

/// Attach the next bank puzzle to every room holding an item, in declaration order.
///
/// Run once, before the first player action. Returns the number of puzzles assigned.
pub fn assign_all(rooms: &mut RoomGraph, bank: &mut PuzzleBank) -> Result<usize, GameError> {
    let targets = rooms.rooms_with_items();
    for name in &targets {
        let puzzle = bank.next_puzzle();
        info!("assigned puzzle \"{}\" to {name}", puzzle.question);
        rooms.room_mut(name)?.puzzle = Some(puzzle);
    }
    Ok(targets.len())
}

/// Replace the puzzle in `room` with the next one from the bank and return it.
///
/// # Errors
/// - `UnknownRoom` if `room` is not in the graph
pub fn reroll_for(rooms: &mut RoomGraph, room: &str, bank: &mut PuzzleBank) -> Result<Puzzle, GameError> {
    let target = rooms.room_mut(room)?;
    let puzzle = bank.next_puzzle();
    info!("rerolled puzzle for {room}: \"{}\"", puzzle.question);
    target.puzzle = Some(puzzle.clone());
    Ok(puzzle)
}
