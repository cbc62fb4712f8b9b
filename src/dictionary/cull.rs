//! Puzzle-specific culling
//!
//! A word survives a cull when every letter it uses is on the puzzle and no
//! two adjacent letters sit on the same side. Culling never resurrects a
//! word and always yields a packed dictionary.

use super::Dictionary;
use super::collate::pack;
use crate::core::letters::{ALPHABET_LEN, letter_to_bit};
use crate::core::{Sides, Word};
use log::debug;

impl Dictionary {
    /// Packed copy holding only the words playable on `sides`
    ///
    /// `self` is left untouched, so one base dictionary can serve many
    /// puzzles.
    #[must_use]
    pub fn culled(&self, sides: &Sides) -> Self {
        let all_letters = sides.all_letters();
        let mut words = self.words.clone();
        let mut words_by_letter = self.words_by_letter;
        let mut live_stats = self.live_stats;

        for letter_idx in 0..ALPHABET_LEN {
            if all_letters & (1 << letter_idx) == 0 {
                words_by_letter[letter_idx] = None;
                live_stats.clear_letter(letter_idx);
                continue;
            }
            let Some(start) = words_by_letter[letter_idx] else {
                continue;
            };

            for slot in &mut words[start.index()..] {
                let word = *slot;
                if word.is_sentinel() {
                    break;
                }
                if word.is_live() && !self.playable(word, sides, all_letters) {
                    *slot = word.killed();
                    live_stats.remove_word(letter_idx, word.len() as u32);
                }
            }
            if live_stats.word_counts[letter_idx] == 0 {
                words_by_letter[letter_idx] = None;
            }
        }

        let culled = pack(&self.text_buf, &words, &words_by_letter, &live_stats);
        debug!(
            "culled {} words to {} for puzzle {sides}",
            self.live_stats.total_count(false),
            culled.live_stats.total_count(false)
        );
        culled
    }

    /// Cull in place
    pub fn cull(&mut self, sides: &Sides) {
        *self = self.culled(sides);
    }

    fn playable(&self, word: Word, sides: &Sides, all_letters: u32) -> bool {
        if word.letters() & !all_letters != 0 {
            return false;
        }
        !self.text_buf.bytes(word).windows(2).any(|pair| {
            let mask = letter_to_bit(pair[0]) | letter_to_bit(pair[1]);
            sides.same_side(mask)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::{assert_packed, test_dictionary};

    fn texts(dict: &Dictionary) -> Vec<&str> {
        dict.iter().map(|(_, w)| dict.text(w)).collect()
    }

    #[test]
    fn cull_keeps_playable_words() {
        let sides = Sides::parse(["btn", "akd", "oes", "mir"]).unwrap();
        let dict = test_dictionary().culled(&sides);
        assert_packed(&dict);
        // ant and manta die on n-t, antonym on y
        assert_eq!(
            texts(&dict),
            vec![
                "bean", "bearskin", "ear", "ion", "kit", "nematode", "ramen", "smoked", "tan"
            ]
        );
    }

    #[test]
    fn cull_rejects_same_side_neighbours() {
        let base = Dictionary::from_words(&["bat", "tab", "tan"]).unwrap();
        let sides = Sides::parse(["btn", "akd", "oes", "mir"]).unwrap();
        assert_eq!(texts(&base.culled(&sides)), vec!["bat", "tab", "tan"]);

        let sides = Sides::parse(["bta", "nkd", "oes", "mir"]).unwrap();
        // b-a, a-t and t-a are now all on one side
        assert!(base.culled(&sides).is_empty());
    }

    #[test]
    fn cull_drops_words_with_foreign_letters() {
        let base = Dictionary::from_words(&["bed", "bez", "dot", "zed"]).unwrap();
        let sides = Sides::parse(["btn", "akd", "oes", "mir"]).unwrap();
        assert_eq!(texts(&base.culled(&sides)), vec!["bed", "dot"]);
    }

    #[test]
    fn cull_is_idempotent() {
        let sides = Sides::parse(["btn", "akd", "oes", "mig"]).unwrap();
        let once = test_dictionary().culled(&sides);
        let twice = once.culled(&sides);
        assert!(once.is_equivalent(&twice));
    }

    #[test]
    fn cull_never_grows_counts() {
        let base = test_dictionary();
        for puzzle in ["btn akd oes mir", "btn akd oes mig", "xyz uvw pqr cfh"] {
            let sides: Sides = puzzle.parse().unwrap();
            let culled = base.culled(&sides);
            assert_packed(&culled);
            for letter_idx in 0..ALPHABET_LEN {
                assert!(
                    culled.text_stats().word_counts[letter_idx]
                        <= base.text_stats().word_counts[letter_idx]
                );
                assert!(
                    culled.text_stats().size_bytes[letter_idx]
                        <= base.text_stats().size_bytes[letter_idx]
                );
            }
        }
    }

    #[test]
    fn cull_in_place_matches_culled() {
        let sides = Sides::parse(["btn", "akd", "oes", "mir"]).unwrap();
        let base = test_dictionary();
        let expected = base.culled(&sides);

        let mut dict = test_dictionary();
        dict.cull(&sides);
        assert!(dict.is_equivalent(&expected));
        // the base dictionary is unchanged by culled()
        assert!(base.is_equivalent(&test_dictionary()));
    }
}
