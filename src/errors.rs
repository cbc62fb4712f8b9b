//! Error types for dictionary setup and puzzle input
//!
//! Two families:
//! - [`PuzzleError`]: the caller handed us a malformed puzzle. Never fatal.
//! - [`EngineError`]: the dictionary could not be built or read back from
//!   its cache. The dictionary stays unpopulated.
//!
//! Broken internal invariants (arena overruns, run terminators missing) are
//! not errors; they panic.

use crate::core::letters::{idx_to_letter, letters_to_string};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`EngineError`]
pub type Result<T> = std::result::Result<T, EngineError>;

/// Malformed puzzle input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("puzzle needs 4 sides, got {0}")]
    SideCount(usize),

    #[error("side {side} '{text}' must be exactly 3 letters")]
    SideLength { side: usize, text: String },

    #[error("side {side} '{text}' contains non-letter characters")]
    NonLetter { side: usize, text: String },

    #[error("side {side} ({letters}) is not 3 unique letters")]
    SideNotThreeLetters { side: usize, letters: String },

    #[error("letter '{letter}' appears on more than one side")]
    OverlappingSides { letter: char },

    #[error("puzzle must have 12 unique letters, not {count} ({letters})")]
    NotTwelveLetters { count: u32, letters: String },
}

impl PuzzleError {
    pub(crate) fn side_not_three_letters(side: usize, mask: u32) -> Self {
        Self::SideNotThreeLetters {
            side,
            letters: letters_to_string(mask),
        }
    }

    pub(crate) fn not_twelve_letters(mask: u32) -> Self {
        Self::NotTwelveLetters {
            count: mask.count_ones(),
            letters: letters_to_string(mask),
        }
    }
}

/// Dictionary setup, load and cache errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// File could not be opened, read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} has unknown extension, must be .txt or .pre", .0.display())]
    UnknownExtension(PathBuf),

    #[error("dictionary contains no words")]
    EmptyDictionary,

    #[error("dictionary is {size} bytes, larger than the {max} bytes a word offset can address")]
    DictionaryTooLarge { size: usize, max: usize },

    /// Text is not grouped by first letter in alphabetical order
    #[error(
        "dictionary is not sorted: word at byte {offset} starts with '{letter}' after words starting with '{previous}'"
    )]
    UnsortedDictionary {
        offset: usize,
        letter: char,
        previous: char,
    },

    /// Cache header does not belong to this build's format
    #[error("cache format mismatch: {0}")]
    CacheFormat(String),

    #[error("cache checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    CacheChecksum { stored: u32, computed: u32 },

    /// Cache decoded but describes an impossible dictionary
    #[error("cache is corrupt: {0}")]
    CacheCorrupt(String),

    #[error("engine has not been set up")]
    NotSetUp,

    #[error("engine is already set up")]
    AlreadySetUp,

    #[error("no dictionary source configured (need words data or a words path)")]
    NoDictionarySource,

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

impl EngineError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unsorted(offset: usize, letter_idx: usize, previous_idx: usize) -> Self {
        Self::UnsortedDictionary {
            offset,
            letter: idx_to_letter(letter_idx),
            previous: idx_to_letter(previous_idx),
        }
    }

    pub(crate) fn cache_format(msg: impl Into<String>) -> Self {
        Self::CacheFormat(msg.into())
    }

    pub(crate) fn cache_corrupt(msg: impl Into<String>) -> Self {
        Self::CacheCorrupt(msg.into())
    }

    /// True for errors that mean "this cache file is unusable, rebuild it"
    #[must_use]
    pub const fn is_cache_error(&self) -> bool {
        matches!(
            self,
            Self::CacheFormat(_) | Self::CacheChecksum { .. } | Self::CacheCorrupt(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_messages_are_descriptive() {
        let err = PuzzleError::side_not_three_letters(2, 0b11);
        assert_eq!(err.to_string(), "side 2 (ab) is not 3 unique letters");

        let err = PuzzleError::not_twelve_letters(0b111);
        assert_eq!(
            err.to_string(),
            "puzzle must have 12 unique letters, not 3 (abc)"
        );
    }

    #[test]
    fn unsorted_names_letters() {
        let err = EngineError::unsorted(8, 1, 2);
        assert_eq!(
            err.to_string(),
            "dictionary is not sorted: word at byte 8 starts with 'b' after words starting with 'c'"
        );
    }

    #[test]
    fn puzzle_errors_convert() {
        let err: EngineError = PuzzleError::SideCount(3).into();
        assert_eq!(err.to_string(), "puzzle needs 4 sides, got 3");
        assert!(!err.is_cache_error());
        assert!(EngineError::cache_corrupt("bad run").is_cache_error());
    }
}
