//! Puzzles and the puzzle bank.
//!
//! The bank is permuted once when the game starts, then handed out through a cursor that
//! advances by exactly one per pull and wraps at the end, so it never runs dry no matter
//! how many rooms or rerolls draw from it.

use labyrinth_data::PuzzleDef;
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::GameError;

/// A question gating an item, with the answer that unlocks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub question: String,
    pub answer: String,
}

impl Puzzle {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Exact match after trimming and case-folding both sides.
    pub fn is_answered_by(&self, attempt: &str) -> bool {
        normalize(attempt) == normalize(&self.answer)
    }
}

impl From<&PuzzleDef> for Puzzle {
    fn from(def: &PuzzleDef) -> Self {
        Puzzle::new(def.question.clone(), def.answer.clone())
    }
}

/// Trim and lower-case player text before any comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// The ordered, permuted pool of puzzles and its wrapping cursor.
#[derive(Debug, Clone)]
pub struct PuzzleBank {
    puzzles: Vec<Puzzle>,
    cursor: usize,
    pulls: usize,
}

impl PuzzleBank {
    /// Create a bank that hands puzzles out in the given order.
    ///
    /// # Errors
    /// - `EmptyPuzzleBank` if `puzzles` is empty
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, GameError> {
        if puzzles.is_empty() {
            return Err(GameError::EmptyPuzzleBank);
        }
        Ok(Self {
            puzzles,
            cursor: 0,
            pulls: 0,
        })
    }

    /// Create a bank after permuting `puzzles` with the supplied generator.
    ///
    /// # Errors
    /// - `EmptyPuzzleBank` if `puzzles` is empty
    pub fn shuffled<R: Rng + ?Sized>(mut puzzles: Vec<Puzzle>, rng: &mut R) -> Result<Self, GameError> {
        puzzles.shuffle(rng);
        PuzzleBank::new(puzzles)
    }

    /// Shuffle deterministically when a seed is given, from OS entropy otherwise.
    ///
    /// # Errors
    /// - `EmptyPuzzleBank` if `puzzles` is empty
    pub fn with_seed(puzzles: Vec<Puzzle>, seed: Option<u64>) -> Result<Self, GameError> {
        if let Some(seed) = seed {
            info!("shuffling {} puzzles with seed {seed}", puzzles.len());
            PuzzleBank::shuffled(puzzles, &mut StdRng::seed_from_u64(seed))
        } else {
            info!("shuffling {} puzzles with an unseeded generator", puzzles.len());
            PuzzleBank::shuffled(puzzles, &mut rand::rng())
        }
    }

    /// Hand out the puzzle under the cursor and advance it by one, wrapping.
    pub fn next_puzzle(&mut self) -> Puzzle {
        let puzzle = self.puzzles[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.puzzles.len();
        self.pulls += 1;
        puzzle
    }

    /// Index of the puzzle the next pull will return.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total pulls since the bank was created.
    pub fn pulls(&self) -> usize {
        self.pulls
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// The permuted order, for inspection.
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank_of(n: usize) -> Vec<Puzzle> {
        (0..n).map(|i| Puzzle::new(format!("q{i}"), format!("a{i}"))).collect()
    }

    #[test]
    fn answers_compare_trimmed_and_case_insensitive() {
        let puzzle = Puzzle::new("Who painted the Mona Lisa?", "Leonardo da Vinci");
        assert!(puzzle.is_answered_by("  leonardo DA vinci "));
        assert!(!puzzle.is_answered_by("leonardo"));
        assert!(!puzzle.is_answered_by("leonardo  da vinci"));
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert_eq!(PuzzleBank::new(Vec::new()).unwrap_err(), GameError::EmptyPuzzleBank);
        assert!(PuzzleBank::with_seed(Vec::new(), Some(1)).is_err());
    }

    #[test]
    fn cursor_advances_once_per_pull_and_wraps() {
        let mut bank = PuzzleBank::new(bank_of(3)).unwrap();
        let order: Vec<_> = (0..7).map(|_| bank.next_puzzle().question).collect();
        assert_eq!(order, ["q0", "q1", "q2", "q0", "q1", "q2", "q0"]);
        assert_eq!(bank.cursor(), 1);
        assert_eq!(bank.pulls(), 7);
    }

    #[test]
    fn pulls_follow_start_plus_k_modulo_len() {
        let mut bank = PuzzleBank::new(bank_of(5)).unwrap();
        bank.next_puzzle();
        bank.next_puzzle();
        let start = bank.cursor();
        for k in 0..12 {
            let expected = format!("q{}", (start + k) % 5);
            assert_eq!(bank.next_puzzle().question, expected);
        }
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let a = PuzzleBank::with_seed(bank_of(20), Some(42)).unwrap();
        let b = PuzzleBank::with_seed(bank_of(20), Some(42)).unwrap();
        assert_eq!(a.puzzles(), b.puzzles());
        assert_eq!(a.len(), 20);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let bank = PuzzleBank::with_seed(bank_of(20), Some(7)).unwrap();
        let mut questions: Vec<_> = bank.puzzles().iter().map(|p| p.question.clone()).collect();
        questions.sort();
        let mut expected: Vec<_> = bank_of(20).into_iter().map(|p| p.question).collect();
        expected.sort();
        assert_eq!(questions, expected);
    }
}
