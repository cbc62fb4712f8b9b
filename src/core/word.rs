//! Bit-packed dictionary word descriptor
//!
//! A `Word` never owns its text. It is a 64-bit handle into a
//! [`TextBuf`](super::TextBuf) plus the letter facts the solver needs:
//!
//! ```text
//!  63     62..58        57..32       31..26    25..0
//! dead | letter_count | letters   | length  | begin
//! ```
//!
//! The layout is explicit so the binary cache format does not depend on how
//! any compiler lays out a struct.

use super::letters::{letter_to_bit, letters_to_string};
use std::fmt;

const BEGIN_BITS: u32 = 26;
const LENGTH_BITS: u32 = 6;
const LETTERS_BITS: u32 = 26;
const COUNT_BITS: u32 = 5;

const LENGTH_SHIFT: u32 = BEGIN_BITS;
const LETTERS_SHIFT: u32 = LENGTH_SHIFT + LENGTH_BITS;
const COUNT_SHIFT: u32 = LETTERS_SHIFT + LETTERS_BITS;
const DEAD_SHIFT: u32 = COUNT_SHIFT + COUNT_BITS;

const BEGIN_MASK: u64 = (1 << BEGIN_BITS) - 1;
const LENGTH_MASK: u64 = (1 << LENGTH_BITS) - 1;
const LETTERS_MASK: u64 = (1 << LETTERS_BITS) - 1;
const COUNT_MASK: u64 = (1 << COUNT_BITS) - 1;

/// Largest arena offset a word can start at
pub const MAX_BEGIN: usize = BEGIN_MASK as usize;

/// Longest word the packed format can describe
///
/// This is a format limit, not a puzzle rule: it moves with `LENGTH_BITS`.
pub const MAX_WORD_LEN: usize = LENGTH_MASK as usize;

/// Words shorter than this are trivial and never used
pub const MIN_WORD_LEN: usize = 3;

/// A puzzle has 12 letters, so a word with more distinct letters can never fit
pub const MAX_UNIQUE_LETTERS: u32 = 12;

/// Fixed-width word descriptor
///
/// The all-zero value is the sentinel that ends a letter run.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Word(u64);

impl Word {
    /// Run terminator
    pub const SENTINEL: Self = Self(0);

    /// Scan one word starting at `offset`
    ///
    /// Reads lowercase letters, then swallows any separator bytes after them so
    /// that `offset + consumed` is the start of the next word (or the end of
    /// `buf`). Returns the decoded word and the number of bytes consumed.
    ///
    /// The word is classified dead when it is shorter than [`MIN_WORD_LEN`],
    /// longer than [`MAX_WORD_LEN`], has more than [`MAX_UNIQUE_LETTERS`]
    /// distinct letters, or repeats a letter back to back.
    ///
    /// # Panics
    /// Panics if `offset` does not fit the `begin` field.
    ///
    /// # Examples
    /// ```
    /// use letterbox_solver::core::Word;
    ///
    /// let text = b"xxxacefc\nnext";
    /// let (word, consumed) = Word::scan(text, 3);
    /// assert_eq!(word.begin(), 3);
    /// assert_eq!(word.len(), 5);
    /// assert_eq!(word.letter_count(), 4);
    /// assert_eq!(consumed, 6);
    /// ```
    #[must_use]
    pub fn scan(buf: &[u8], offset: usize) -> (Self, usize) {
        assert!(
            offset <= MAX_BEGIN,
            "word offset {offset} exceeds the packed begin field"
        );

        let mut letters = 0u32;
        let mut letter_count = 0u32;
        let mut has_double = false;
        let mut p = offset;

        while p < buf.len() {
            let bit = letter_to_bit(buf[p]);
            if bit == 0 {
                break;
            }
            has_double |= p > offset && buf[p] == buf[p - 1];
            letter_count += u32::from(letters & bit == 0);
            letters |= bit;
            p += 1;
        }
        let char_count = p - offset;

        while p < buf.len() && letter_to_bit(buf[p]) == 0 {
            p += 1;
        }

        let is_dead = char_count > MAX_WORD_LEN
            || char_count < MIN_WORD_LEN
            || letter_count > MAX_UNIQUE_LETTERS
            || has_double;

        let word = Self::pack(
            offset,
            char_count.min(MAX_WORD_LEN),
            letters,
            letter_count,
            is_dead,
        );
        (word, p - offset)
    }

    /// Decode a free-standing word, such as a puzzle side
    ///
    /// Only the leading letter run of `text` is read; `begin` is 0.
    #[must_use]
    pub fn from_letters(text: &str) -> Self {
        Self::scan(text.as_bytes(), 0).0
    }

    /// Rebuild a word from its encoded form (cache loading)
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Encoded form
    #[inline]
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    const fn pack(
        begin: usize,
        length: usize,
        letters: u32,
        letter_count: u32,
        is_dead: bool,
    ) -> Self {
        Self(
            (begin as u64 & BEGIN_MASK)
                | ((length as u64 & LENGTH_MASK) << LENGTH_SHIFT)
                | ((letters as u64 & LETTERS_MASK) << LETTERS_SHIFT)
                | ((letter_count as u64 & COUNT_MASK) << COUNT_SHIFT)
                | ((is_dead as u64) << DEAD_SHIFT),
        )
    }

    /// Same word relocated to `begin` in another arena
    ///
    /// # Panics
    /// Panics if `begin` does not fit the `begin` field.
    #[must_use]
    pub fn with_begin(self, begin: usize) -> Self {
        assert!(
            begin <= MAX_BEGIN,
            "word offset {begin} exceeds the packed begin field"
        );
        Self((self.0 & !BEGIN_MASK) | begin as u64)
    }

    /// Same word, marked dead
    #[inline]
    #[must_use]
    pub const fn killed(self) -> Self {
        Self(self.0 | (1 << DEAD_SHIFT))
    }

    /// Arena offset of the first letter
    #[inline]
    #[must_use]
    pub const fn begin(self) -> usize {
        (self.0 & BEGIN_MASK) as usize
    }

    /// Letter count of the raw text (saturated at [`MAX_WORD_LEN`])
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        ((self.0 >> LENGTH_SHIFT) & LENGTH_MASK) as usize
    }

    /// True for the sentinel
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// True for the sentinel
    #[inline]
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        self.is_empty()
    }

    /// Mask of distinct letters
    #[inline]
    #[must_use]
    pub const fn letters(self) -> u32 {
        ((self.0 >> LETTERS_SHIFT) & LETTERS_MASK) as u32
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn letter_count(self) -> u32 {
        ((self.0 >> COUNT_SHIFT) & COUNT_MASK) as u32
    }

    #[inline]
    #[must_use]
    pub const fn is_dead(self) -> bool {
        (self.0 >> DEAD_SHIFT) & 1 == 1
    }

    #[inline]
    #[must_use]
    pub const fn is_live(self) -> bool {
        !self.is_sentinel() && !self.is_dead()
    }

    /// Distinct letters in alphabetical order
    #[must_use]
    pub fn letters_string(self) -> String {
        letters_to_string(self.letters())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            return write!(f, "Word(sentinel)");
        }
        f.debug_struct("Word")
            .field("begin", &self.begin())
            .field("len", &self.len())
            .field("letters", &self.letters_string())
            .field("letter_count", &self.letter_count())
            .field("is_dead", &self.is_dead())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(letters: &str) -> u32 {
        letters
            .bytes()
            .map(letter_to_bit)
            .fold(0, |acc, bit| acc | bit)
    }

    #[test]
    fn sentinel_is_default() {
        let word = Word::default();
        assert!(word.is_sentinel());
        assert!(!word.is_live());
        assert_eq!(word, Word::SENTINEL);
    }

    #[test]
    fn scan_mid_buffer() {
        let txt = b"xxxacefc";
        let (word, consumed) = Word::scan(txt, 3);
        assert!(!word.is_sentinel());
        assert_eq!(word.begin(), 3);
        assert_eq!(word.len(), 5);
        assert_eq!(word.letter_count(), 4);
        assert_eq!(word.letters(), mask("acef"));
        assert!(!word.is_dead());
        assert_eq!(consumed, 5);

        let moved = word.with_begin(7);
        assert_eq!(moved.begin(), 7);
        assert_eq!(moved.len(), word.len());
        assert_eq!(moved.letter_count(), word.letter_count());
        assert_eq!(moved.letters(), word.letters());
        assert_eq!(moved.is_dead(), word.is_dead());
    }

    #[test]
    fn scan_consumes_separators() {
        let txt = b"cat\r\n\ndog";
        let (word, consumed) = Word::scan(txt, 0);
        assert_eq!(word.len(), 3);
        assert_eq!(consumed, 6);
        assert_eq!(txt[consumed], b'd');

        let (last, consumed) = Word::scan(txt, 6);
        assert_eq!(last.len(), 3);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn shortest_live_word() {
        let word = Word::from_letters("aba");
        assert_eq!(word.len(), 3);
        assert!(!word.is_dead());
    }

    #[test]
    fn doubled_letter_is_dead() {
        let word = Word::from_letters("aceffc");
        assert_eq!(word.begin(), 0);
        assert_eq!(word.len(), 6);
        assert_eq!(word.letter_count(), 4);
        assert_eq!(word.letters(), mask("acef"));
        assert!(word.is_dead());

        assert!(Word::from_letters("heehaw").is_dead());
    }

    #[test]
    fn too_short_is_dead() {
        let word = Word::from_letters("ab");
        assert_eq!(word.len(), 2);
        assert!(word.is_dead());
    }

    #[test]
    fn too_many_unique_letters_is_dead() {
        let word = Word::from_letters("abcdefghijklm");
        assert_eq!(word.len(), 13);
        assert_eq!(word.letter_count(), 13);
        assert!(word.is_dead());

        let twelve = Word::from_letters("abcdefghijkl");
        assert!(!twelve.is_dead());
    }

    #[test]
    fn too_long_is_dead_and_never_a_sentinel() {
        let text = "ab".repeat(32);
        let word = Word::from_letters(&text);
        assert!(word.is_dead());
        assert_eq!(word.len(), MAX_WORD_LEN);
        assert!(!word.is_sentinel());
    }

    #[test]
    fn killing_is_sticky() {
        let word = Word::from_letters("bearskin");
        assert!(word.is_live());
        let dead = word.killed();
        assert!(dead.is_dead());
        assert!(dead.killed().is_dead());
        assert_eq!(dead.letters(), word.letters());
        assert!(dead.with_begin(12).is_dead());
    }

    #[test]
    fn bits_round_trip_fields() {
        let (word, _) = Word::scan(b"zz nematode", 3);
        let copy = Word::from_bits(word.to_bits());
        assert_eq!(copy, word);
        assert_eq!(copy.begin(), 3);
        assert_eq!(copy.letters_string(), "ademnot");
    }

    #[test]
    fn rescanning_recovered_text_matches() {
        let txt = b"ant\nantonym\nbearskin\nhumdinger\n";
        let mut offset = 0;
        while offset < txt.len() {
            let (word, consumed) = Word::scan(txt, offset);
            let recovered = &txt[word.begin()..word.begin() + word.len()];
            let (again, _) = Word::scan(recovered, 0);
            assert_eq!(again.letters(), word.letters());
            assert_eq!(again.letter_count(), word.letter_count());
            assert_eq!(again.len(), word.len());
            offset += consumed;
        }
    }
}
