//! Preprocess command
//!
//! Builds a `.pre` cache from a text word list and checks that it reads back
//! to the same dictionary.

use crate::dictionary::Dictionary;
use crate::errors::{EngineError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Result of writing a cache
pub struct PreprocessResult {
    pub words_path: PathBuf,
    pub output_path: PathBuf,
    pub live_words: usize,
    pub text_bytes: usize,
    pub cache_bytes: u64,
    pub load_time: Duration,
    pub write_time: Duration,
    pub reload_time: Duration,
}

/// Load `words_path`, write it to `output_path` and verify the round trip
///
/// # Errors
/// Returns an error if the word list cannot be loaded, the cache cannot be
/// written, or it reads back differently.
pub fn preprocess(words_path: &Path, output_path: &Path) -> Result<PreprocessResult> {
    let start = Instant::now();
    let dictionary = Dictionary::load(words_path)?;
    let load_time = start.elapsed();

    let start = Instant::now();
    dictionary.save(output_path)?;
    let write_time = start.elapsed();

    let start = Instant::now();
    let reloaded = Dictionary::load(output_path)?;
    let reload_time = start.elapsed();
    if !reloaded.is_equivalent(&dictionary) {
        return Err(EngineError::cache_corrupt(format!(
            "{} does not read back to the dictionary it was written from",
            output_path.display()
        )));
    }

    let cache_bytes = fs::metadata(output_path)
        .map_err(|e| EngineError::io(output_path, e))?
        .len();

    Ok(PreprocessResult {
        words_path: words_path.to_path_buf(),
        output_path: output_path.to_path_buf(),
        live_words: dictionary.len(),
        text_bytes: dictionary.text_buf().len(),
        cache_bytes,
        load_time,
        write_time,
        reload_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::DICT_TEXT;

    #[test]
    fn preprocess_writes_verified_cache() {
        let dir = tempfile::tempdir().unwrap();
        let words_path = dir.path().join("words.txt");
        let output_path = dir.path().join("words.pre");
        fs::write(&words_path, DICT_TEXT).unwrap();

        let result = preprocess(&words_path, &output_path).unwrap();
        assert_eq!(result.live_words, 32);
        assert!(result.cache_bytes > result.text_bytes as u64);
        assert!(output_path.exists());
    }

    #[test]
    fn preprocess_rejects_text_output() {
        let dir = tempfile::tempdir().unwrap();
        let words_path = dir.path().join("words.txt");
        fs::write(&words_path, DICT_TEXT).unwrap();

        assert!(matches!(
            preprocess(&words_path, &dir.path().join("out.txt")),
            Err(EngineError::UnknownExtension(_))
        ));
    }
}
