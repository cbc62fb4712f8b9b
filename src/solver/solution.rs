//! Two-word solutions and their presentation order

use crate::core::PUZZLE_LETTERS;
use crate::dictionary::{Dictionary, WordIdx};
use rustc_hash::FxHashSet;

/// A chain of two words that together cover every puzzle letter
///
/// `a`'s last letter is `b`'s first letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solution {
    pub a: WordIdx,
    pub b: WordIdx,
}

impl Solution {
    /// Combined letter count of both words
    #[must_use]
    pub fn total_len(&self, dict: &Dictionary) -> usize {
        dict[self.a].len() + dict[self.b].len()
    }

    /// Display form: `"a -> b"`, or just the word when one covers the puzzle
    #[must_use]
    pub fn render(&self, dict: &Dictionary) -> String {
        let (a, b) = (dict[self.a], dict[self.b]);
        if a.letter_count() == PUZZLE_LETTERS {
            dict.text(a).to_string()
        } else if b.letter_count() == PUZZLE_LETTERS {
            dict.text(b).to_string()
        } else {
            format!("{} -> {}", dict.text(a), dict.text(b))
        }
    }
}

/// Every solution found for one puzzle
///
/// Indices refer to the dictionary the puzzle was solved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionSet {
    solutions: Vec<Solution>,
}

impl SolutionSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            solutions: Vec::new(),
        }
    }

    pub fn add(&mut self, a: WordIdx, b: WordIdx) {
        self.solutions.push(Solution { a, b });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Solution> {
        self.solutions.iter()
    }

    /// Order by combined word length, shortest first
    ///
    /// Ties keep discovery order.
    pub fn sort(&mut self, dict: &Dictionary) {
        self.solutions
            .sort_by_key(|solution| solution.total_len(dict));
    }

    /// Display lines in current order, with repeated lines dropped
    ///
    /// A word that covers the puzzle alone shows up in many pairs; it is
    /// listed once.
    #[must_use]
    pub fn render(&self, dict: &Dictionary) -> Vec<String> {
        let mut seen = FxHashSet::default();
        self.solutions
            .iter()
            .map(|solution| solution.render(dict))
            .filter(|line| seen.insert(line.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}
