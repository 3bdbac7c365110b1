//! Puzzle session state machine.
//!
//! A session starts when the player tries to collect an item guarded by a puzzle. It
//! consumes one line of input per step and ends only on a correct answer (`Solved`) or
//! the literal `exit` (`Abandoned`). Once the wrong-answer count reaches the threshold
//! every further miss, including the one that reaches it, moves the session into
//! `ConfirmReroll`, where `yes` swaps in the next puzzle from the bank and resets the count.
//! Any other reply returns to `Presented` with the count untouched.

use log::info;
use variantly::Variantly;

use crate::assigner::reroll_for;
use crate::error::GameError;
use crate::puzzle::{Puzzle, PuzzleBank, normalize};
use crate::room::{RoomGraph, RoomId};

/// Token that abandons the puzzle (not the game).
pub const ABANDON_TOKEN: &str = "exit";
/// The only reply that accepts a reroll.
pub const ACCEPT_REROLL: &str = "yes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Question shown, waiting for an answer.
    Presented,
    /// Waiting for a yes/no on swapping the puzzle.
    ConfirmReroll,
    Solved,
    Abandoned,
}

/// What a single line of input did to the session.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum SessionStep {
    Solved,
    Abandoned,
    /// Wrong answer below the threshold; carries the running count.
    WrongAnswer(usize),
    /// Wrong answer at or past the threshold; a reroll question follows.
    OfferReroll(usize),
    Rerolled(Puzzle),
    RerollDeclined,
}

#[derive(Debug, Clone)]
pub struct PuzzleSession {
    room: RoomId,
    puzzle: Puzzle,
    wrong_attempts: usize,
    threshold: usize,
    state: SessionState,
}

impl PuzzleSession {
    /// Open a session on the puzzle currently guarding `room`.
    ///
    /// Returns `Ok(None)` when the room has no puzzle, in which case nothing stands between
    /// the player and the item.
    ///
    /// # Errors
    /// - `UnknownRoom` if `room` is not in the graph
    pub fn begin(rooms: &RoomGraph, room: &str, threshold: usize) -> Result<Option<Self>, GameError> {
        let Some(puzzle) = rooms.room(room)?.puzzle.clone() else {
            return Ok(None);
        };
        Ok(Some(Self {
            room: room.to_string(),
            puzzle,
            wrong_attempts: 0,
            threshold: threshold.max(1),
            state: SessionState::Presented,
        }))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn wrong_attempts(&self) -> usize {
        self.wrong_attempts
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Solved | SessionState::Abandoned)
    }

    /// Feed one line of player input through the machine.
    ///
    /// Input arriving after the session has finished is ignored and the final state repeated.
    ///
    /// # Errors
    /// - `UnknownRoom` if a reroll targets a room that has vanished from the graph
    pub fn advance(&mut self, input: &str, rooms: &mut RoomGraph, bank: &mut PuzzleBank) -> Result<SessionStep, GameError> {
        let reply = normalize(input);
        let step = match self.state {
            SessionState::Solved => SessionStep::Solved,
            SessionState::Abandoned => SessionStep::Abandoned,
            SessionState::Presented => {
                if self.puzzle.is_answered_by(&reply) {
                    self.state = SessionState::Solved;
                    SessionStep::Solved
                } else if reply == ABANDON_TOKEN {
                    self.state = SessionState::Abandoned;
                    SessionStep::Abandoned
                } else {
                    self.wrong_attempts += 1;
                    if self.wrong_attempts >= self.threshold {
                        self.state = SessionState::ConfirmReroll;
                        SessionStep::OfferReroll(self.wrong_attempts)
                    } else {
                        SessionStep::WrongAnswer(self.wrong_attempts)
                    }
                }
            },
            SessionState::ConfirmReroll => {
                self.state = SessionState::Presented;
                if reply == ACCEPT_REROLL {
                    let fresh = reroll_for(rooms, &self.room, bank)?;
                    self.puzzle = fresh.clone();
                    self.wrong_attempts = 0;
                    SessionStep::Rerolled(fresh)
                } else {
                    SessionStep::RerollDeclined
                }
            },
        };
        info!(
            "puzzle session in {}: {step:?} (wrong attempts: {})",
            self.room, self.wrong_attempts
        );
        Ok(step)
    }
}
