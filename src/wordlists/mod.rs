//! Embedded sample dictionary
//!
//! A small sorted word list compiled into the binary, so the CLI and tests
//! work without `words_alpha.txt` on disk.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_WORDS, SAMPLE_WORDS_COUNT};
