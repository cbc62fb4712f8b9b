//! Per-letter word counts and byte sizes

use super::letters::ALPHABET_LEN;

/// Word counts and text sizes bucketed by starting letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub word_counts: [u32; ALPHABET_LEN],
    pub size_bytes: [u32; ALPHABET_LEN],
}

impl TextStats {
    /// Total number of words
    ///
    /// With `null_terminated`, adds one sentinel slot for every letter that has
    /// words, which is the length of the matching word table.
    #[must_use]
    pub fn total_count(&self, null_terminated: bool) -> u32 {
        self.word_counts
            .iter()
            .map(|&count| count + u32::from(count > 0 && null_terminated))
            .sum()
    }

    /// Total number of text bytes
    #[must_use]
    pub fn total_size_bytes(&self) -> u32 {
        self.size_bytes.iter().sum()
    }

    /// True when no letter has any word
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_counts.iter().all(|&count| count == 0)
    }

    /// Forget everything counted for one letter
    pub fn clear_letter(&mut self, letter_idx: usize) {
        self.word_counts[letter_idx] = 0;
        self.size_bytes[letter_idx] = 0;
    }

    /// Count one more word of `len` bytes under `letter_idx`
    pub fn add_word(&mut self, letter_idx: usize, len: u32) {
        self.word_counts[letter_idx] += 1;
        self.size_bytes[letter_idx] += len;
    }

    /// Take one word of `len` bytes back out of `letter_idx`
    ///
    /// # Panics
    /// Panics if the letter does not account for such a word.
    pub fn remove_word(&mut self, letter_idx: usize, len: u32) {
        assert!(
            self.word_counts[letter_idx] > 0 && self.size_bytes[letter_idx] >= len,
            "stats accounting error for letter index {letter_idx}"
        );
        self.word_counts[letter_idx] -= 1;
        self.size_bytes[letter_idx] -= len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let stats = TextStats::default();
        assert!(stats.is_empty());
        assert_eq!(stats.total_count(false), 0);
        assert_eq!(stats.total_count(true), 0);
        assert_eq!(stats.total_size_bytes(), 0);
    }

    #[test]
    fn null_terminated_count_adds_one_per_used_letter() {
        let mut stats = TextStats::default();
        stats.add_word(0, 4);
        stats.add_word(0, 8);
        stats.add_word(25, 6);

        assert!(!stats.is_empty());
        assert_eq!(stats.total_count(false), 3);
        assert_eq!(stats.total_count(true), 5);
        assert_eq!(stats.total_size_bytes(), 18);
    }

    #[test]
    fn remove_and_clear() {
        let mut stats = TextStats::default();
        stats.add_word(3, 5);
        stats.add_word(3, 7);
        stats.remove_word(3, 5);
        assert_eq!(stats.word_counts[3], 1);
        assert_eq!(stats.size_bytes[3], 7);

        stats.clear_letter(3);
        assert!(stats.is_empty());
    }

    #[test]
    #[should_panic(expected = "stats accounting error")]
    fn remove_from_empty_letter_panics() {
        let mut stats = TextStats::default();
        stats.remove_word(1, 3);
    }
}
