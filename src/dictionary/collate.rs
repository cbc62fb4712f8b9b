//! Scan raw text into letter runs, then pack the live words

use super::{Dictionary, WordIdx};
use crate::core::letters::{ALPHABET_LEN, idx_to_letter, letter_to_idx};
use crate::core::{TextBuf, TextStats, Word};

impl Dictionary {
    /// Split sorted text into one sentinel-terminated run per starting letter
    ///
    /// The result still holds dead words and the raw text. Callers pack it
    /// with [`Dictionary::clone_packed`] before handing it out.
    ///
    /// # Panics
    /// Panics if a run's length disagrees with `mem_stats`.
    pub(super) fn collate(text_buf: TextBuf, mem_stats: TextStats) -> Self {
        let mut words = Vec::with_capacity(mem_stats.total_count(true) as usize);
        let mut words_by_letter = [None; ALPHABET_LEN];
        let mut live_stats = TextStats::default();

        let text = text_buf.as_bytes();
        let mut current: Option<usize> = None;
        let mut run_start = 0;
        let mut p = text_buf.first_word_offset();

        while p < text.len() {
            let Some(letter_idx) = letter_to_idx(text[p]) else {
                break;
            };
            if current != Some(letter_idx) {
                if let Some(prev) = current {
                    close_run(&mut words, run_start, prev, &mem_stats);
                }
                run_start = words.len();
                words_by_letter[letter_idx] = Some(WordIdx::new(run_start));
                current = Some(letter_idx);
            }

            let (word, consumed) = Word::scan(text, p);
            if word.is_live() {
                live_stats.add_word(letter_idx, word.len() as u32);
            }
            words.push(word);
            p += consumed;
        }
        if let Some(prev) = current {
            close_run(&mut words, run_start, prev, &mem_stats);
        }

        assert_eq!(
            words.len(),
            mem_stats.total_count(true) as usize,
            "collated word table does not match text stats"
        );

        // a letter whose words all died has no entry point
        for (slot, &count) in words_by_letter.iter_mut().zip(&live_stats.word_counts) {
            if count == 0 {
                *slot = None;
            }
        }

        Self {
            mem_stats,
            words_by_letter,
            text_buf,
            words,
            live_stats,
        }
    }

    /// Copy of this dictionary holding only live words
    ///
    /// Runs are laid out in letter order, each followed by a sentinel, and
    /// the new arena is sized to exactly the live words' letters.
    #[must_use]
    pub fn clone_packed(&self) -> Self {
        pack(
            &self.text_buf,
            &self.words,
            &self.words_by_letter,
            &self.live_stats,
        )
    }
}

fn close_run(words: &mut Vec<Word>, run_start: usize, letter_idx: usize, mem_stats: &TextStats) {
    words.push(Word::SENTINEL);
    assert_eq!(
        words.len() - run_start,
        mem_stats.word_counts[letter_idx] as usize + 1,
        "run for '{}' does not match text stats",
        idx_to_letter(letter_idx)
    );
}

/// Build a packed dictionary from a (possibly unpacked) word table
///
/// Only letters with a nonzero live count in `live_stats` are copied, and
/// only the live words of their runs.
///
/// # Panics
/// Panics if a letter with live words has no run, or a run's live words
/// disagree with `live_stats`.
pub(super) fn pack(
    text_buf: &TextBuf,
    words: &[Word],
    words_by_letter: &[Option<WordIdx>; ALPHABET_LEN],
    live_stats: &TextStats,
) -> Dictionary {
    let mut packed_text = TextBuf::with_capacity(live_stats.total_size_bytes() as usize);
    let mut packed_words = Vec::with_capacity(live_stats.total_count(true) as usize);
    let mut packed_index = [None; ALPHABET_LEN];

    for letter_idx in 0..ALPHABET_LEN {
        let live = live_stats.word_counts[letter_idx] as usize;
        if live == 0 {
            continue;
        }
        let start = words_by_letter[letter_idx].unwrap_or_else(|| {
            panic!(
                "letter '{}' has {live} live words but no run",
                idx_to_letter(letter_idx)
            )
        });

        let run_start = packed_words.len();
        packed_index[letter_idx] = Some(WordIdx::new(run_start));
        for &word in words[start.index()..]
            .iter()
            .take_while(|word| !word.is_sentinel())
        {
            if word.is_live() {
                packed_words.push(packed_text.append(text_buf, word));
            }
        }
        assert_eq!(
            packed_words.len() - run_start,
            live,
            "live words for '{}' do not match stats",
            idx_to_letter(letter_idx)
        );
        packed_words.push(Word::SENTINEL);
    }

    assert_eq!(packed_text.len(), packed_text.capacity());

    Dictionary {
        mem_stats: *live_stats,
        words_by_letter: packed_index,
        text_buf: packed_text,
        words: packed_words,
        live_stats: *live_stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::{DICT_TEXT, assert_packed, test_dictionary};

    fn collated() -> Dictionary {
        let text_buf = TextBuf::from_bytes(DICT_TEXT.as_bytes().to_vec());
        let stats = text_buf.collect_stats().unwrap();
        Dictionary::collate(text_buf, stats)
    }

    #[test]
    fn text_stats_match_raw_text() {
        let dict = collated();
        let stats = dict.mem_stats;
        let idx = |c: u8| letter_to_idx(c).unwrap();

        assert_eq!(stats.word_counts[idx(b'a')], 2);
        assert_eq!(stats.size_bytes[idx(b'a')], 12);
        assert_eq!(stats.word_counts[idx(b'b')], 2);
        assert_eq!(stats.size_bytes[idx(b'b')], 14);
        assert_eq!(stats.word_counts[idx(b'd')], 2);
        assert_eq!(stats.size_bytes[idx(b'd')], 13);
        assert_eq!(stats.word_counts[idx(b'h')], 3);
        assert_eq!(stats.size_bytes[idx(b'h')], 21);
        assert_eq!(stats.word_counts[idx(b's')], 3);
        assert_eq!(stats.size_bytes[idx(b's')], 44);
        assert_eq!(stats.word_counts[idx(b'z')], 3);
        assert_eq!(stats.size_bytes[idx(b'z')], 20);

        assert_eq!(stats.total_count(false), 35);
        assert_eq!(stats.total_size_bytes() as usize, DICT_TEXT.len());
    }

    #[test]
    fn collate_keeps_dead_words_in_runs() {
        let dict = collated();
        assert_eq!(dict.words.len(), 35 + 26);
        assert_eq!(dict.live_stats.total_count(false), 32);

        let dead: Vec<&str> = dict
            .words
            .iter()
            .filter(|w| w.is_dead())
            .map(|&w| dict.text(w))
            .collect();
        assert_eq!(
            dead,
            vec!["heehaw", "s", "supercalifragilisticexpialidocious"]
        );
    }

    #[test]
    fn pack_matches_loaded_dictionary() {
        let packed = collated().clone_packed();
        assert_packed(&packed);
        assert!(packed.is_equivalent(&test_dictionary()));
        assert_eq!(packed.text_buf.len(), packed.text_buf.capacity());
    }

    #[test]
    fn packing_twice_is_identity() {
        let once = test_dictionary();
        let twice = once.clone_packed();
        assert!(once.is_equivalent(&twice));
    }

    #[test]
    fn sparse_alphabet_collates() {
        let dict = Dictionary::from_words(&["cab", "cob", "moo", "mop", "zoo"]).unwrap();
        assert_packed(&dict);
        assert_eq!(dict.len(), 3);
        let m = letter_to_idx(b'm').unwrap();
        let run: Vec<&str> = dict.run(m).iter().map(|&w| dict.text(w)).collect();
        assert_eq!(run, vec!["mop"]);
    }
}
