//! Dictionary analysis command
//!
//! Per-letter statistics for the loaded dictionary, optionally narrowed to a
//! puzzle, plus a verdict on why a given word is or is not usable.

use crate::core::letters::{ALPHABET_LEN, idx_to_letter, letter_to_bit};
use crate::core::{MAX_UNIQUE_LETTERS, MAX_WORD_LEN, MIN_WORD_LEN, Sides, Word};
use crate::dictionary::Dictionary;
use std::fmt;

/// Word and byte counts for one starting letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCount {
    pub letter: char,
    pub words: u32,
    pub bytes: u32,
}

/// Why a word can or cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordVerdict {
    Live,
    NotLowercase,
    TooShort,
    TooLong,
    TooManyLetters(u32),
    DoubledLetter(char),
    NotInDictionary,
    ForeignLetter(char),
    SameSide(char, char),
}

impl WordVerdict {
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
}

impl fmt::Display for WordVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => write!(f, "playable"),
            Self::NotLowercase => write!(f, "contains characters other than a-z"),
            Self::TooShort => write!(f, "shorter than {MIN_WORD_LEN} letters"),
            Self::TooLong => write!(f, "longer than {MAX_WORD_LEN} letters"),
            Self::TooManyLetters(n) => {
                write!(f, "{n} distinct letters, more than {MAX_UNIQUE_LETTERS}")
            }
            Self::DoubledLetter(c) => write!(f, "repeats '{c}' back to back"),
            Self::NotInDictionary => write!(f, "not in the dictionary"),
            Self::ForeignLetter(c) => write!(f, "uses '{c}', which is not on the puzzle"),
            Self::SameSide(a, b) => write!(f, "steps from '{a}' to '{b}' on the same side"),
        }
    }
}

/// Verdict on one word
pub struct WordReport {
    pub word: String,
    pub letters: String,
    pub verdict: WordVerdict,
}

/// Result of analyzing a dictionary
pub struct AnalysisResult {
    pub total_words: usize,
    pub total_bytes: usize,
    pub letters: Vec<LetterCount>,
    /// Playable word count when a puzzle was given
    pub puzzle_words: Option<usize>,
    pub word: Option<WordReport>,
}

/// Classify a word by the rules applied when a dictionary loads
///
/// # Examples
/// ```
/// use letterbox_solver::commands::analyze::{WordVerdict, classify_word};
///
/// assert_eq!(classify_word("heehaw"), WordVerdict::DoubledLetter('e'));
/// assert_eq!(classify_word("nematode"), WordVerdict::Live);
/// ```
#[must_use]
pub fn classify_word(text: &str) -> WordVerdict {
    let bytes = text.as_bytes();
    if !bytes.iter().all(u8::is_ascii_lowercase) {
        return WordVerdict::NotLowercase;
    }
    if bytes.len() < MIN_WORD_LEN {
        return WordVerdict::TooShort;
    }
    if bytes.len() > MAX_WORD_LEN {
        return WordVerdict::TooLong;
    }
    let word = Word::from_letters(text);
    if word.letter_count() > MAX_UNIQUE_LETTERS {
        return WordVerdict::TooManyLetters(word.letter_count());
    }
    if let Some(pair) = bytes.windows(2).find(|pair| pair[0] == pair[1]) {
        return WordVerdict::DoubledLetter(char::from(pair[0]));
    }
    WordVerdict::Live
}

/// Classify a word against a specific puzzle
#[must_use]
pub fn classify_for_puzzle(text: &str, sides: &Sides) -> WordVerdict {
    let verdict = classify_word(text);
    if !verdict.is_live() {
        return verdict;
    }
    let all_letters = sides.all_letters();
    if let Some(&b) = text
        .as_bytes()
        .iter()
        .find(|&&b| letter_to_bit(b) & all_letters == 0)
    {
        return WordVerdict::ForeignLetter(char::from(b));
    }
    if let Some(pair) = text
        .as_bytes()
        .windows(2)
        .find(|pair| sides.same_side(letter_to_bit(pair[0]) | letter_to_bit(pair[1])))
    {
        return WordVerdict::SameSide(char::from(pair[0]), char::from(pair[1]));
    }
    WordVerdict::Live
}

/// Collect per-letter statistics, and a verdict for `word` if given
#[must_use]
pub fn analyze_dictionary(
    dictionary: &Dictionary,
    word: Option<&str>,
    sides: Option<&Sides>,
) -> AnalysisResult {
    let culled = sides.map(|sides| dictionary.culled(sides));
    let stats = culled.as_ref().unwrap_or(dictionary).text_stats();

    let letters = (0..ALPHABET_LEN)
        .map(|idx| LetterCount {
            letter: idx_to_letter(idx),
            words: stats.word_counts[idx],
            bytes: stats.size_bytes[idx],
        })
        .collect();

    let word = word.map(|text| {
        let text = text.trim().to_lowercase();
        let mut verdict = match sides {
            Some(sides) => classify_for_puzzle(&text, sides),
            None => classify_word(&text),
        };
        if verdict.is_live() && dictionary.find(&text).is_none() {
            verdict = WordVerdict::NotInDictionary;
        }
        WordReport {
            letters: Word::from_letters(&text).letters_string(),
            word: text,
            verdict,
        }
    });

    AnalysisResult {
        total_words: dictionary.len(),
        total_bytes: dictionary.text_buf().len(),
        letters,
        puzzle_words: culled.as_ref().map(Dictionary::len),
        word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::test_dictionary;

    #[test]
    fn classify_load_rules() {
        assert_eq!(classify_word("s"), WordVerdict::TooShort);
        assert_eq!(classify_word("Cat"), WordVerdict::NotLowercase);
        assert_eq!(
            classify_word("supercalifragilisticexpialidocious"),
            WordVerdict::TooManyLetters(15)
        );
        assert_eq!(classify_word(&"ab".repeat(32)), WordVerdict::TooLong);
        assert_eq!(classify_word("zigzag"), WordVerdict::Live);
    }

    #[test]
    fn classify_puzzle_rules() {
        let sides = Sides::parse(["btn", "akd", "oes", "mir"]).unwrap();
        assert_eq!(classify_for_puzzle("bearskin", &sides), WordVerdict::Live);
        assert_eq!(
            classify_for_puzzle("antonym", &sides),
            WordVerdict::ForeignLetter('y')
        );
        assert_eq!(
            classify_for_puzzle("manta", &sides),
            WordVerdict::SameSide('n', 't')
        );
    }

    #[test]
    fn analyze_counts_letters() {
        let dict = test_dictionary();
        let result = analyze_dictionary(&dict, None, None);
        assert_eq!(result.total_words, 32);
        assert_eq!(result.letters.len(), ALPHABET_LEN);

        let h = &result.letters[7];
        assert_eq!(h.letter, 'h');
        assert_eq!(h.words, 2);
        assert_eq!(h.bytes, 12);
        assert!(result.puzzle_words.is_none());
    }

    #[test]
    fn analyze_with_puzzle_and_word() {
        let dict = test_dictionary();
        let sides = Sides::parse(["btn", "akd", "oes", "mir"]).unwrap();

        let result = analyze_dictionary(&dict, Some("Nematode"), Some(&sides));
        assert_eq!(result.puzzle_words, Some(9));
        let report = result.word.unwrap();
        assert_eq!(report.word, "nematode");
        assert_eq!(report.letters, "ademnot");
        assert!(report.verdict.is_live());

        let result = analyze_dictionary(&dict, Some("bandit"), Some(&sides));
        assert_eq!(result.word.unwrap().verdict, WordVerdict::NotInDictionary);
    }
}
