//! Two-word chain search

use super::SolutionSet;
use crate::core::letters::ALPHABET_LEN;
use crate::core::{LETTERS_PER_SIDE, PUZZLE_LETTERS, Sides};
use crate::dictionary::Dictionary;
use crate::errors::PuzzleError;
use log::debug;
use std::time::Instant;

/// Finds every two-word chain covering a puzzle
///
/// The dictionary must already be culled for the puzzle being solved: the
/// search only checks chaining and letter coverage, not side adjacency.
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Check side sizes and coverage, returning the puzzle's letter mask
    ///
    /// # Errors
    /// Returns a `PuzzleError` if a side is not three unique letters or the
    /// sides do not cover twelve letters between them.
    pub fn validate(sides: &Sides) -> Result<u32, PuzzleError> {
        for (i, side) in sides.words().iter().enumerate() {
            if side.letter_count() as usize != LETTERS_PER_SIDE {
                return Err(PuzzleError::side_not_three_letters(i + 1, side.letters()));
            }
        }
        let all_letters = sides.all_letters();
        if all_letters.count_ones() != PUZZLE_LETTERS {
            return Err(PuzzleError::not_twelve_letters(all_letters));
        }
        Ok(all_letters)
    }

    /// Every pair `(a, b)` where `b` starts with `a`'s last letter and the
    /// two words use all twelve puzzle letters
    ///
    /// Solutions come back in discovery order; call [`SolutionSet::sort`] to
    /// rank them.
    ///
    /// # Errors
    /// See [`Solver::validate`].
    pub fn solve(&self, sides: &Sides) -> Result<SolutionSet, PuzzleError> {
        let all_letters = Self::validate(sides)?;
        let dict = self.dictionary;
        let start = Instant::now();
        let mut solutions = SolutionSet::new();

        for letter_idx in (0..ALPHABET_LEN).filter(|&i| all_letters & (1 << i) != 0) {
            for (a_idx, a) in dict.run_indexed(letter_idx) {
                let Some(last) = dict.last_letter_idx(a) else {
                    continue;
                };
                for (b_idx, b) in dict.run_indexed(last) {
                    if a.letters() | b.letters() == all_letters {
                        solutions.add(a_idx, b_idx);
                    }
                }
            }
        }

        debug!(
            "found {} solutions among {} words in {:.2?}",
            solutions.len(),
            dict.len(),
            start.elapsed()
        );
        Ok(solutions)
    }
}

impl Dictionary {
    /// Solve a puzzle against this (culled) dictionary
    ///
    /// # Errors
    /// See [`Solver::validate`].
    pub fn solve(&self, sides: &Sides) -> Result<SolutionSet, PuzzleError> {
        Solver::new(self).solve(sides)
    }
}
