//! Packed dictionary
//!
//! A [`Dictionary`] owns one text arena and a flat table of [`Word`]s grouped
//! into 26 runs, one per starting letter. Every run ends in a sentinel and a
//! 26-entry index points at the first word of each run that has live words.
//!
//! Every dictionary handed out by this module is *packed*: its runs hold only
//! live words and its arena holds only their letters.
//!
//! ```rust
//! use letterbox_solver::core::Sides;
//! use letterbox_solver::dictionary::Dictionary;
//!
//! let base = Dictionary::from_words(&["bearskin", "nematode", "zebra"]).unwrap();
//! let sides = Sides::parse(["btn", "akd", "oes", "mir"]).unwrap();
//!
//! let culled = base.culled(&sides);
//! let solutions = culled.solve(&sides).unwrap();
//! assert_eq!(solutions.render(&culled), vec!["bearskin -> nematode"]);
//! ```

mod cache;
mod collate;
mod cull;

pub use cache::{CACHE_EXTENSION, CACHE_VERSION};

use crate::core::letters::{ALPHABET_LEN, letter_to_idx};
use crate::core::{MAX_BEGIN, TextBuf, TextStats, Word};
use crate::errors::{EngineError, Result};
use log::debug;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::ops::Index;
use std::path::Path;
use std::time::Instant;

/// Extension of plain word-list files
pub const TEXT_EXTENSION: &str = "txt";

/// Position of a word in one dictionary's word table
///
/// Only meaningful against the dictionary that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordIdx(u32);

impl WordIdx {
    /// # Panics
    /// Panics if `idx` does not fit in 32 bits.
    #[must_use]
    pub fn new(idx: usize) -> Self {
        Self(u32::try_from(idx).unwrap_or_else(|_| panic!("word index {idx} overflows u32")))
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Bulk-loaded, packed word list
#[derive(Default)]
pub struct Dictionary {
    /// Counts as loaded; equal to `live_stats` once packed
    mem_stats: TextStats,
    words_by_letter: [Option<WordIdx>; ALPHABET_LEN],
    text_buf: TextBuf,
    words: Vec<Word>,
    /// Counts of words not marked dead
    live_stats: TextStats,
}

impl Dictionary {
    /// Load a dictionary from a word list (`.txt`) or a cache file (`.pre`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, has an unknown
    /// extension, or does not hold a valid dictionary.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(OsStr::to_str) {
            Some(TEXT_EXTENSION) => {
                let text = fs::read(path).map_err(|e| EngineError::io(path, e))?;
                Self::from_text(text)
            }
            Some(CACHE_EXTENSION) => Self::load_cache(path),
            _ => Err(EngineError::UnknownExtension(path.to_path_buf())),
        }
    }

    /// Write the dictionary to a `.pre` cache file
    ///
    /// # Errors
    /// Returns an error if `path` does not end in `.pre` or cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.extension().and_then(OsStr::to_str) != Some(CACHE_EXTENSION) {
            return Err(EngineError::UnknownExtension(path.to_path_buf()));
        }
        self.save_cache(path)
    }

    /// Build a dictionary from sorted, newline-separated lowercase text
    ///
    /// Words must be grouped by first letter in alphabetical order. Dead words
    /// are dropped before the dictionary is returned.
    ///
    /// # Errors
    /// Returns an error if the text is unsorted, too large to address, or
    /// holds no usable words.
    pub fn from_text(text: Vec<u8>) -> Result<Self> {
        if text.len() > MAX_BEGIN {
            return Err(EngineError::DictionaryTooLarge {
                size: text.len(),
                max: MAX_BEGIN,
            });
        }

        let start = Instant::now();
        let text_buf = TextBuf::from_bytes(text);
        let mem_stats = text_buf.collect_stats()?;
        if mem_stats.is_empty() {
            return Err(EngineError::EmptyDictionary);
        }

        let collated = Self::collate(text_buf, mem_stats);
        if collated.live_stats.is_empty() {
            return Err(EngineError::EmptyDictionary);
        }
        let packed = collated.clone_packed();

        debug!(
            "collated {} words ({} live) in {:.2?}",
            mem_stats.total_count(false),
            packed.len(),
            start.elapsed()
        );
        Ok(packed)
    }

    /// Build a dictionary from a sorted word slice
    ///
    /// # Errors
    /// Same as [`Dictionary::from_text`].
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let mut text = Vec::new();
        for word in words {
            text.extend_from_slice(word.as_ref().as_bytes());
            text.push(b'\n');
        }
        Self::from_text(text)
    }

    /// Number of live words
    #[must_use]
    pub fn len(&self) -> usize {
        debug_assert_eq!(
            self.mem_stats, self.live_stats,
            "len() called on an unpacked dictionary"
        );
        self.live_stats.total_count(false) as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_stats.is_empty()
    }

    /// Per-letter counts of live words
    #[must_use]
    pub const fn text_stats(&self) -> &TextStats {
        &self.live_stats
    }

    #[must_use]
    pub const fn text_buf(&self) -> &TextBuf {
        &self.text_buf
    }

    /// Whole word table, sentinels included
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at `idx`, if it is inside the table
    #[must_use]
    pub fn word(&self, idx: WordIdx) -> Option<Word> {
        self.words.get(idx.index()).copied()
    }

    /// Text of a word from this dictionary
    #[must_use]
    pub fn text(&self, word: Word) -> &str {
        self.text_buf.text(word)
    }

    /// Letter index of a word's first letter
    #[must_use]
    pub fn first_letter_idx(&self, word: Word) -> Option<usize> {
        self.text_buf
            .bytes(word)
            .first()
            .copied()
            .and_then(letter_to_idx)
    }

    /// Letter index of a word's last letter
    #[must_use]
    pub fn last_letter_idx(&self, word: Word) -> Option<usize> {
        self.text_buf
            .bytes(word)
            .last()
            .copied()
            .and_then(letter_to_idx)
    }

    /// First word starting with a letter, or `None` if no live word does
    #[must_use]
    pub fn first_word(&self, letter_idx: usize) -> Option<WordIdx> {
        self.words_by_letter[letter_idx]
    }

    /// Last word starting with a letter
    #[must_use]
    pub fn last_word(&self, letter_idx: usize) -> Option<WordIdx> {
        let start = self.first_word(letter_idx)?;
        let count = self.live_stats.word_counts[letter_idx] as usize;
        let last = start.index() + count - 1;
        debug_assert!(
            self.words[last + 1].is_sentinel(),
            "run for letter {letter_idx} is not sentinel-terminated"
        );
        Some(WordIdx::new(last))
    }

    /// Live words starting with a letter, without the sentinel
    #[must_use]
    pub fn run(&self, letter_idx: usize) -> &[Word] {
        match self.words_by_letter[letter_idx] {
            Some(start) => {
                let count = self.live_stats.word_counts[letter_idx] as usize;
                &self.words[start.index()..start.index() + count]
            }
            None => &[],
        }
    }

    /// Live words starting with a letter, with their indices
    pub fn run_indexed(&self, letter_idx: usize) -> impl Iterator<Item = (WordIdx, Word)> + '_ {
        let start = self.words_by_letter[letter_idx].map_or(0, WordIdx::index);
        self.run(letter_idx)
            .iter()
            .enumerate()
            .map(move |(offset, &word)| (WordIdx::new(start + offset), word))
    }

    /// Every live word, in table order
    pub fn iter(&self) -> impl Iterator<Item = (WordIdx, Word)> + '_ {
        (0..ALPHABET_LEN).flat_map(|letter_idx| self.run_indexed(letter_idx))
    }

    /// Look a word up by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<WordIdx> {
        let letter_idx = text.bytes().next().and_then(letter_to_idx)?;
        self.run_indexed(letter_idx)
            .find(|&(_, word)| self.text_buf.bytes(word) == text.as_bytes())
            .map(|(idx, _)| idx)
    }

    /// True if both dictionaries hold the same stats, index, words and text
    #[must_use]
    pub fn is_equivalent(&self, rhs: &Self) -> bool {
        self.mem_stats == rhs.mem_stats
            && self.live_stats == rhs.live_stats
            && self.words_by_letter == rhs.words_by_letter
            && self.words == rhs.words
            && self.text_buf.as_bytes() == rhs.text_buf.as_bytes()
    }
}

impl Index<WordIdx> for Dictionary {
    type Output = Word;

    fn index(&self, idx: WordIdx) -> &Word {
        &self.words[idx.index()]
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("live_words", &self.live_stats.total_count(false))
            .field("table_len", &self.words.len())
            .field("text_bytes", &self.text_buf.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::letters::idx_to_letter;

    pub(crate) const DICT_TEXT: &str = "ant\nantonym\n\
        bean\nbearskin\n\
        cat\n\
        debating\ndog\n\
        ear\n\
        fit\n\
        gab\n\
        hah\nheehaw\nhumdinger\n\
        ion\n\
        jot\n\
        kit\n\
        lag\n\
        manta\n\
        nematode\n\
        octopus\n\
        penguin\n\
        quiche\n\
        ramen\n\
        s\nsmoked\nsupercalifragilisticexpialidocious\n\
        tan\n\
        use\n\
        vim\n\
        wit\n\
        xray\n\
        yank\n\
        zebra\nzephyr\nzigzag\n";

    pub(crate) fn test_dictionary() -> Dictionary {
        Dictionary::from_text(DICT_TEXT.as_bytes().to_vec()).unwrap()
    }

    /// Every run is contiguous, live, sentinel-terminated and matches the stats
    pub(crate) fn assert_packed(dict: &Dictionary) {
        assert_eq!(dict.mem_stats, dict.live_stats);
        assert_eq!(dict.words.len(), dict.live_stats.total_count(true) as usize);
        assert_eq!(
            dict.text_buf.len(),
            dict.live_stats.total_size_bytes() as usize
        );
        for letter_idx in 0..ALPHABET_LEN {
            let run = dict.run(letter_idx);
            assert_eq!(
                run.len(),
                dict.live_stats.word_counts[letter_idx] as usize,
                "run length for '{}'",
                idx_to_letter(letter_idx)
            );
            if let Some(start) = dict.first_word(letter_idx) {
                assert!(dict.words[start.index() + run.len()].is_sentinel());
            }
            for &word in run {
                assert!(word.is_live());
                assert_eq!(dict.first_letter_idx(word), Some(letter_idx));
            }
        }
    }

    #[test]
    fn load_drops_dead_words() {
        let dict = test_dictionary();
        // s (too short), heehaw (doubled letter) and
        // supercalifragilisticexpialidocious (too many letters) are gone
        assert_eq!(dict.len(), 32);
        assert!(dict.find("heehaw").is_none());
        assert!(dict.find("s").is_none());
        assert!(dict.find("supercalifragilisticexpialidocious").is_none());
        assert!(dict.find("smoked").is_some());
        assert_packed(&dict);
    }

    #[test]
    fn first_and_last_words_per_letter() {
        let dict = test_dictionary();
        for letter_idx in 0..ALPHABET_LEN {
            if dict.text_stats().word_counts[letter_idx] > 0 {
                let first = dict.first_word(letter_idx).unwrap();
                let last = dict.last_word(letter_idx).unwrap();
                assert_eq!(dict.first_letter_idx(dict[first]), Some(letter_idx));
                assert_eq!(dict.first_letter_idx(dict[last]), Some(letter_idx));
            } else {
                assert!(dict.first_word(letter_idx).is_none());
            }
        }

        let h = letter_to_idx(b'h').unwrap();
        let run: Vec<&str> = dict.run(h).iter().map(|&w| dict.text(w)).collect();
        assert_eq!(run, vec!["hah", "humdinger"]);
    }

    #[test]
    fn letter_with_only_dead_words_has_no_run() {
        let dict = Dictionary::from_words(&["ant", "bee", "bo", "cat"]).unwrap();
        let b = letter_to_idx(b'b').unwrap();
        assert!(dict.first_word(b).is_none());
        assert!(dict.run(b).is_empty());
        assert_eq!(dict.len(), 2);
        assert_packed(&dict);
    }

    #[test]
    fn iter_visits_every_live_word_in_order() {
        let dict = test_dictionary();
        let texts: Vec<&str> = dict.iter().map(|(_, w)| dict.text(w)).collect();
        assert_eq!(texts.len(), dict.len());
        assert_eq!(texts.first(), Some(&"ant"));
        assert_eq!(texts.last(), Some(&"zigzag"));
        for (idx, word) in dict.iter() {
            assert_eq!(dict.word(idx), Some(word));
        }
    }

    #[test]
    fn rejects_empty_and_unsorted_text() {
        assert!(matches!(
            Dictionary::from_text(Vec::new()),
            Err(EngineError::EmptyDictionary)
        ));
        assert!(matches!(
            Dictionary::from_text(b"\n\n".to_vec()),
            Err(EngineError::EmptyDictionary)
        ));
        assert!(matches!(
            Dictionary::from_words(&["ab", "xy"]),
            Err(EngineError::EmptyDictionary)
        ));
        assert!(matches!(
            Dictionary::from_words(&["zebra", "ant"]),
            Err(EngineError::UnsortedDictionary { .. })
        ));
    }

    #[test]
    fn load_reports_missing_and_unknown_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Dictionary::load(dir.path().join("foo.txt")),
            Err(EngineError::Io { .. })
        ));
        assert!(matches!(
            Dictionary::load(dir.path().join("foo.pre")),
            Err(EngineError::Io { .. })
        ));
        assert!(matches!(
            Dictionary::load(dir.path().join("foo.csv")),
            Err(EngineError::UnknownExtension(_))
        ));
    }

    #[test]
    fn load_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("word_list.txt");
        fs::write(&path, DICT_TEXT).unwrap();

        let dict = Dictionary::load(&path).unwrap();
        assert!(dict.is_equivalent(&test_dictionary()));
    }

    #[test]
    fn save_requires_cache_extension() {
        let dir = tempfile::tempdir().unwrap();
        let dict = test_dictionary();
        assert!(matches!(
            dict.save(dir.path().join("words.txt")),
            Err(EngineError::UnknownExtension(_))
        ));
    }
}
