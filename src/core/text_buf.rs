//! Append-only text arena shared by every word of a dictionary

use super::letters::{letter_to_bit, letter_to_idx};
use super::{TextStats, Word};
use crate::errors::EngineError;

/// Fixed-capacity byte arena
///
/// Words are `(begin, len)` handles into one of these. The capacity is set
/// when the arena is created and is never exceeded: an append that would
/// overflow it is a packing bug and panics.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TextBuf {
    text: Vec<u8>,
    capacity: usize,
}

impl TextBuf {
    /// Empty arena that can hold exactly `capacity` bytes
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Arena holding raw dictionary text, full to capacity
    #[must_use]
    pub fn from_bytes(text: Vec<u8>) -> Self {
        let capacity = text.len();
        Self { text, capacity }
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whole arena contents
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Copy `word`'s bytes out of `src` onto the end of this arena
    ///
    /// Returns the relocated word; every field but `begin` is unchanged.
    ///
    /// # Panics
    /// Panics if the copy would overrun the declared capacity.
    pub fn append(&mut self, src: &Self, word: Word) -> Word {
        assert!(
            self.text.len() + word.len() <= self.capacity,
            "text arena overrun: {} + {} > {}",
            self.text.len(),
            word.len(),
            self.capacity
        );
        let relocated = word.with_begin(self.text.len());
        self.text.extend_from_slice(src.bytes(word));
        relocated
    }

    /// Raw bytes of a word
    ///
    /// # Panics
    /// Panics if the word does not lie inside this arena.
    #[inline]
    #[must_use]
    pub fn bytes(&self, word: Word) -> &[u8] {
        &self.text[word.begin()..word.begin() + word.len()]
    }

    /// Word text
    ///
    /// Arena words only ever span lowercase ASCII, so this never loses data.
    #[must_use]
    pub fn text(&self, word: Word) -> &str {
        std::str::from_utf8(self.bytes(word)).unwrap_or_default()
    }

    /// Offset of the first letter in the arena, skipping leading separators
    #[must_use]
    pub fn first_word_offset(&self) -> usize {
        self.text
            .iter()
            .position(|&b| letter_to_bit(b) != 0)
            .unwrap_or(self.text.len())
    }

    /// Count words and bytes per starting letter
    ///
    /// Each word's byte size includes the separators after it, so the sizes
    /// add up to the arena length (minus any leading separators).
    ///
    /// # Errors
    /// Returns `EngineError::UnsortedDictionary` if a word starts with a
    /// letter earlier than a previous word's first letter.
    pub fn collect_stats(&self) -> Result<TextStats, EngineError> {
        let mut stats = TextStats::default();
        let mut last_letter = 0;
        let mut p = self.first_word_offset();

        while p < self.text.len() {
            let Some(letter_idx) = letter_to_idx(self.text[p]) else {
                break;
            };
            if letter_idx < last_letter {
                return Err(EngineError::unsorted(p, letter_idx, last_letter));
            }
            last_letter = letter_idx;

            let start = p;
            while p < self.text.len() && letter_to_bit(self.text[p]) != 0 {
                p += 1;
            }
            while p < self.text.len() && letter_to_bit(self.text[p]) == 0 {
                p += 1;
            }
            stats.add_word(letter_idx, (p - start) as u32);
        }

        Ok(stats)
    }
}
