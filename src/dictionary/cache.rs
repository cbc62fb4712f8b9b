//! Preprocessed dictionary cache (`.pre`)
//!
//! A packed dictionary written out verbatim so later runs can skip scanning
//! and collating the word list.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ HEADER (8 bytes)                             │
//! │   magic: "LBXD"                              │
//! │   version: u8                                │
//! │   word_bits: u8 (64)                         │
//! │   reserved: [u8; 2]                          │
//! ├──────────────────────────────────────────────┤
//! │ STATS                                        │
//! │   word_counts: [u32; 26]                     │
//! │   size_bytes:  [u32; 26]                     │
//! │   words_by_letter: [u32; 26] (MAX = none)    │
//! ├──────────────────────────────────────────────┤
//! │ WORDS: u64 × (words + 1 sentinel per run)    │
//! │ TEXT:  u8 × total size bytes                 │
//! ├──────────────────────────────────────────────┤
//! │ FOOTER (8 bytes)                             │
//! │   crc32: u32 (over header + body)            │
//! │   magic: "DXBL"                              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! All integers are little-endian. A cache that fails any check is reported
//! as a cache error and the caller rebuilds from the word list.

use super::{Dictionary, WordIdx};
use crate::core::letters::{ALPHABET_LEN, idx_to_letter};
use crate::core::{MAX_BEGIN, TextBuf, TextStats, Word};
use crate::errors::{EngineError, Result};
use crc32fast::Hasher as Crc32Hasher;
use log::debug;
use std::fs;
use std::path::Path;

/// Extension of cache files
pub const CACHE_EXTENSION: &str = "pre";

/// Bumped whenever the layout or [`Word`] bit packing changes
pub const CACHE_VERSION: u8 = 1;

const MAGIC: [u8; 4] = *b"LBXD";
const FOOTER_MAGIC: [u8; 4] = *b"DXBL";
const HEADER_SIZE: usize = 8;
const FOOTER_SIZE: usize = 8;
const WORD_BITS: u8 = 64;
const NO_RUN: u32 = u32::MAX;

impl Dictionary {
    /// Serialize this dictionary in cache format
    #[must_use]
    pub fn to_cache_bytes(&self) -> Vec<u8> {
        let body_len = 3 * ALPHABET_LEN * 4 + self.words.len() * 8 + self.text_buf.len();
        let mut buf = Vec::with_capacity(HEADER_SIZE + body_len + FOOTER_SIZE);

        buf.extend_from_slice(&MAGIC);
        buf.push(CACHE_VERSION);
        buf.push(WORD_BITS);
        buf.extend_from_slice(&[0, 0]);

        for &count in &self.mem_stats.word_counts {
            buf.extend_from_slice(&count.to_le_bytes());
        }
        for &size in &self.mem_stats.size_bytes {
            buf.extend_from_slice(&size.to_le_bytes());
        }
        for start in &self.words_by_letter {
            let raw = start.map_or(NO_RUN, |idx| idx.0);
            buf.extend_from_slice(&raw.to_le_bytes());
        }
        for word in &self.words {
            buf.extend_from_slice(&word.to_bits().to_le_bytes());
        }
        buf.extend_from_slice(self.text_buf.as_bytes());

        let crc32 = compute_crc32(&buf);
        buf.extend_from_slice(&crc32.to_le_bytes());
        buf.extend_from_slice(&FOOTER_MAGIC);
        buf
    }

    /// Decode a dictionary written by [`Dictionary::to_cache_bytes`]
    ///
    /// # Errors
    /// Returns a cache error if the header, checksum or structure is wrong.
    pub fn from_cache_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE + FOOTER_SIZE {
            return Err(EngineError::cache_format(format!(
                "file is {} bytes, too short for header and footer",
                bytes.len()
            )));
        }

        let (content, footer) = bytes.split_at(bytes.len() - FOOTER_SIZE);
        if footer[4..] != FOOTER_MAGIC {
            return Err(EngineError::cache_format("bad footer magic"));
        }
        if content[..4] != MAGIC {
            return Err(EngineError::cache_format("bad magic"));
        }
        if content[4] != CACHE_VERSION {
            return Err(EngineError::cache_format(format!(
                "version {} (expected {CACHE_VERSION})",
                content[4]
            )));
        }
        if content[5] != WORD_BITS {
            return Err(EngineError::cache_format(format!(
                "{}-bit words (expected {WORD_BITS})",
                content[5]
            )));
        }

        let stored = u32::from_le_bytes([footer[0], footer[1], footer[2], footer[3]]);
        let computed = compute_crc32(content);
        if stored != computed {
            return Err(EngineError::CacheChecksum { stored, computed });
        }

        let mut reader = SliceReader::new(&content[HEADER_SIZE..]);
        let mut stats = TextStats::default();
        for count in &mut stats.word_counts {
            *count = reader.u32()?;
        }
        for size in &mut stats.size_bytes {
            *size = reader.u32()?;
        }
        let mut words_by_letter = [None; ALPHABET_LEN];
        for start in &mut words_by_letter {
            let raw = reader.u32()?;
            *start = (raw != NO_RUN).then_some(WordIdx(raw));
        }

        let limit = MAX_BEGIN as u32;
        if stats
            .word_counts
            .iter()
            .chain(&stats.size_bytes)
            .any(|&n| n > limit)
        {
            return Err(EngineError::cache_corrupt("per-letter stats out of range"));
        }

        let text_len = stats.total_size_bytes() as usize;
        if text_len > MAX_BEGIN {
            return Err(EngineError::cache_corrupt(format!(
                "text size {text_len} exceeds {MAX_BEGIN}"
            )));
        }
        if stats.total_count(false) as usize > text_len {
            return Err(EngineError::cache_corrupt("more words than text bytes"));
        }

        let word_count = stats.total_count(true) as usize;
        let words = (0..word_count)
            .map(|_| reader.u64().map(Word::from_bits))
            .collect::<Result<Vec<_>>>()?;
        let text = reader.take(text_len)?.to_vec();
        if !reader.is_empty() {
            return Err(EngineError::cache_corrupt(format!(
                "{} trailing bytes after text",
                reader.remaining()
            )));
        }

        let dict = Self {
            mem_stats: stats,
            words_by_letter,
            text_buf: TextBuf::from_bytes(text),
            words,
            live_stats: stats,
        };
        dict.validate_packed()?;
        Ok(dict)
    }

    pub(super) fn load_cache(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| EngineError::io(path, e))?;
        let dict = Self::from_cache_bytes(&bytes)?;
        debug!("read {} words from cache {}", dict.len(), path.display());
        Ok(dict)
    }

    pub(super) fn save_cache(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_cache_bytes()).map_err(|e| EngineError::io(path, e))?;
        debug!("wrote {} words to cache {}", self.len(), path.display());
        Ok(())
    }

    /// Check the layout a packed dictionary must have
    fn validate_packed(&self) -> Result<()> {
        let text_len = self.text_buf.len();
        let mut expected_start = 0;

        for letter_idx in 0..ALPHABET_LEN {
            let letter = idx_to_letter(letter_idx);
            let count = self.live_stats.word_counts[letter_idx] as usize;

            let Some(start) = self.words_by_letter[letter_idx] else {
                if count != 0 {
                    return Err(EngineError::cache_corrupt(format!(
                        "letter '{letter}' has {count} words but no run"
                    )));
                }
                continue;
            };
            if count == 0 || start.index() != expected_start {
                return Err(EngineError::cache_corrupt(format!(
                    "run for '{letter}' starts at {} (expected {expected_start}, {count} words)",
                    start.index()
                )));
            }

            let end = start.index() + count;
            let mut size = 0;
            for &word in &self.words[start.index()..end] {
                if !word.is_live() || word.begin() + word.len() > text_len {
                    return Err(EngineError::cache_corrupt(format!(
                        "bad word {word:?} in run for '{letter}'"
                    )));
                }
                if self.first_letter_idx(word) != Some(letter_idx) {
                    return Err(EngineError::cache_corrupt(format!(
                        "word '{}' filed under '{letter}'",
                        self.text(word)
                    )));
                }
                size += word.len();
            }
            if !self.words[end].is_sentinel() {
                return Err(EngineError::cache_corrupt(format!(
                    "run for '{letter}' is not terminated"
                )));
            }
            if size != self.live_stats.size_bytes[letter_idx] as usize {
                return Err(EngineError::cache_corrupt(format!(
                    "run for '{letter}' holds {size} bytes, stats say {}",
                    self.live_stats.size_bytes[letter_idx]
                )));
            }
            expected_start = end + 1;
        }

        if expected_start != self.words.len() {
            return Err(EngineError::cache_corrupt("word table has stray entries"));
        }
        Ok(())
    }
}

fn compute_crc32(data: &[u8]) -> u32 {
    let mut hasher = Crc32Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Bounds-checked little-endian reads over a byte slice
struct SliceReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| {
                EngineError::cache_corrupt(format!(
                    "truncated: wanted {n} bytes at offset {}",
                    HEADER_SIZE + self.pos
                ))
            })?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn u64(&mut self) -> Result<u64> {
        let b = self.take(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(b);
        Ok(u64::from_le_bytes(raw))
    }

    const fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sides;
    use crate::dictionary::tests::test_dictionary;

    #[test]
    fn cache_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("word_list.pre");
        let dict = test_dictionary();

        dict.save(&path).unwrap();
        let loaded = Dictionary::load(&path).unwrap();
        assert!(loaded.is_equivalent(&dict));
    }

    #[test]
    fn culled_dictionary_round_trips() {
        let sides = Sides::parse(["btn", "akd", "oes", "mir"]).unwrap();
        let culled = test_dictionary().culled(&sides);
        let loaded = Dictionary::from_cache_bytes(&culled.to_cache_bytes()).unwrap();
        assert!(loaded.is_equivalent(&culled));
    }

    #[test]
    fn empty_dictionary_round_trips() {
        let sides = Sides::parse(["bta", "nkd", "oes", "mir"]).unwrap();
        let empty = Dictionary::from_words(&["bat"]).unwrap().culled(&sides);
        assert!(empty.is_empty());
        let loaded = Dictionary::from_cache_bytes(&empty.to_cache_bytes()).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn rejects_wrong_version() {
        let mut bytes = test_dictionary().to_cache_bytes();
        bytes[4] = CACHE_VERSION + 1;
        let err = Dictionary::from_cache_bytes(&bytes).unwrap_err();
        assert!(matches!(err, EngineError::CacheFormat(_)));
        assert!(err.is_cache_error());
    }

    #[test]
    fn rejects_bad_magic_and_short_input() {
        let mut bytes = test_dictionary().to_cache_bytes();
        bytes[0] = b'X';
        assert!(matches!(
            Dictionary::from_cache_bytes(&bytes),
            Err(EngineError::CacheFormat(_))
        ));
        assert!(matches!(
            Dictionary::from_cache_bytes(b"LBXD"),
            Err(EngineError::CacheFormat(_))
        ));
    }

    #[test]
    fn rejects_flipped_text_byte() {
        let mut bytes = test_dictionary().to_cache_bytes();
        let last_text_byte = bytes.len() - FOOTER_SIZE - 1;
        bytes[last_text_byte] ^= 0x01;
        assert!(matches!(
            Dictionary::from_cache_bytes(&bytes),
            Err(EngineError::CacheChecksum { .. })
        ));
    }

    #[test]
    fn rejects_consistent_but_impossible_layout() {
        let dict = test_dictionary();
        let mut bytes = dict.to_cache_bytes();
        // point the 'a' run one word further in and re-seal the checksum
        let offset = HEADER_SIZE + 2 * ALPHABET_LEN * 4;
        bytes[offset..offset + 4].copy_from_slice(&1u32.to_le_bytes());
        let content_len = bytes.len() - FOOTER_SIZE;
        let crc32 = compute_crc32(&bytes[..content_len]);
        bytes[content_len..content_len + 4].copy_from_slice(&crc32.to_le_bytes());

        assert!(matches!(
            Dictionary::from_cache_bytes(&bytes),
            Err(EngineError::CacheCorrupt(_))
        ));
    }

    #[test]
    fn rejects_truncated_body() {
        let dict = test_dictionary();
        let bytes = dict.to_cache_bytes();
        let content_len = bytes.len() - FOOTER_SIZE;
        let mut short = bytes[..content_len - 10].to_vec();
        let crc32 = compute_crc32(&short);
        short.extend_from_slice(&crc32.to_le_bytes());
        short.extend_from_slice(&FOOTER_MAGIC);

        assert!(matches!(
            Dictionary::from_cache_bytes(&short),
            Err(EngineError::CacheCorrupt(_))
        ));
    }
}
