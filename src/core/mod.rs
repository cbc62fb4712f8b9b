//! Core domain types for the dictionary engine
//!
//! The packed word descriptor, the text arena it points into, per-letter
//! statistics and puzzle sides. Everything here is plain data with no I/O.

pub mod letters;
mod sides;
mod stats;
mod text_buf;
mod word;

pub use sides::{LETTERS_PER_SIDE, PUZZLE_LETTERS, SIDE_COUNT, Sides};
pub use stats::TextStats;
pub use text_buf::TextBuf;
pub use word::{MAX_BEGIN, MAX_UNIQUE_LETTERS, MAX_WORD_LEN, MIN_WORD_LEN, Word};
