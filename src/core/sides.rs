//! Puzzle sides
//!
//! A puzzle is four sides of three letters each. Sides are ordinary
//! [`Word`]s decoded from their three letters; only their letter masks matter.

use super::Word;
use crate::errors::PuzzleError;
use std::fmt;
use std::str::FromStr;

/// Number of sides on a puzzle
pub const SIDE_COUNT: usize = 4;

/// Letters on each side
pub const LETTERS_PER_SIDE: usize = 3;

/// Distinct letters in a well-formed puzzle
pub const PUZZLE_LETTERS: u32 = (SIDE_COUNT * LETTERS_PER_SIDE) as u32;

/// The four sides of a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sides([Word; SIDE_COUNT]);

impl Sides {
    /// Parse and validate four side strings
    ///
    /// Input is lowercased. Each side must be exactly three letters, and no
    /// letter may appear twice anywhere on the puzzle.
    ///
    /// # Errors
    /// Returns a `PuzzleError` describing the first problem found.
    ///
    /// # Examples
    /// ```
    /// use letterbox_solver::core::Sides;
    ///
    /// let sides = Sides::parse(["btn", "AKD", "oes", "mir"]).unwrap();
    /// assert_eq!(sides.all_letters().count_ones(), 12);
    ///
    /// assert!(Sides::parse(["btn", "akd", "oes", "mib"]).is_err());
    /// ```
    pub fn parse<S: AsRef<str>>(sides: [S; SIDE_COUNT]) -> Result<Self, PuzzleError> {
        let mut words = [Word::SENTINEL; SIDE_COUNT];
        let mut all_letters = 0u32;

        for (i, side) in sides.iter().enumerate() {
            let side_num = i + 1;
            let text = side.as_ref().to_lowercase();

            if text.len() != LETTERS_PER_SIDE {
                return Err(PuzzleError::SideLength {
                    side: side_num,
                    text,
                });
            }
            if !text.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(PuzzleError::NonLetter {
                    side: side_num,
                    text,
                });
            }

            let word = Word::from_letters(&text);
            if word.letter_count() as usize != LETTERS_PER_SIDE {
                return Err(PuzzleError::side_not_three_letters(
                    side_num,
                    word.letters(),
                ));
            }
            let overlap = all_letters & word.letters();
            if overlap != 0 {
                let letter = super::letters::idx_to_letter(overlap.trailing_zeros() as usize);
                return Err(PuzzleError::OverlappingSides { letter });
            }

            all_letters |= word.letters();
            words[i] = word;
        }

        Ok(Self(words))
    }

    /// Wrap already-decoded sides without validating them
    ///
    /// The solver re-checks side sizes and letter coverage itself.
    #[must_use]
    pub const fn from_words(words: [Word; SIDE_COUNT]) -> Self {
        Self(words)
    }

    #[must_use]
    pub const fn words(&self) -> &[Word; SIDE_COUNT] {
        &self.0
    }

    /// Union of every side's letters
    #[must_use]
    pub fn all_letters(&self) -> u32 {
        self.0.iter().fold(0, |acc, side| acc | side.letters())
    }

    /// True if two letters in `pair` sit on the same side
    ///
    /// `pair` is the mask of two adjacent letters of a word.
    #[inline]
    #[must_use]
    pub fn same_side(&self, pair: u32) -> bool {
        self.0
            .iter()
            .any(|side| (side.letters() & pair).count_ones() > 1)
    }
}

/// Parses the boxed form `"btn akd oes mir"` (any whitespace between sides)
impl FromStr for Sides {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let sides: [&str; SIDE_COUNT] = parts
            .as_slice()
            .try_into()
            .map_err(|_| PuzzleError::SideCount(parts.len()))?;
        Self::parse(sides)
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.0.iter().map(|side| side.letters_string()).collect();
        write!(f, "{}", names.join(" "))
    }
}
