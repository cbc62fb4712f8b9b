//! Word list helpers
//!
//! Turns word slices into dictionary text and builds the embedded sample
//! dictionary.

use super::SAMPLE_WORDS;
use crate::dictionary::Dictionary;
use crate::errors::Result;

/// Join words into newline-separated dictionary text
///
/// # Examples
/// ```
/// use letterbox_solver::wordlists::loader::text_from_slice;
///
/// assert_eq!(text_from_slice(&["ant", "bee"]), b"ant\nbee\n");
/// ```
#[must_use]
pub fn text_from_slice(slice: &[&str]) -> Vec<u8> {
    let len = slice.iter().map(|word| word.len() + 1).sum();
    let mut text = Vec::with_capacity(len);
    for word in slice {
        text.extend_from_slice(word.trim().as_bytes());
        text.push(b'\n');
    }
    text
}

/// Text of the embedded sample dictionary
#[must_use]
pub fn sample_text() -> Vec<u8> {
    text_from_slice(SAMPLE_WORDS)
}

/// Load the embedded sample dictionary
///
/// # Errors
/// Only fails if the embedded list itself is malformed.
pub fn sample_dictionary() -> Result<Dictionary> {
    Dictionary::from_text(sample_text())
}
