//! Setup-once, solve-many facade
//!
//! [`Engine`] owns the base dictionary. Every solve culls a private copy, so
//! the base stays untouched and one engine can answer any number of puzzles.
//!
//! ```rust
//! use letterbox_solver::config::EngineConfig;
//! use letterbox_solver::engine::Engine;
//!
//! let mut engine = Engine::new();
//! engine
//!     .setup(&EngineConfig::from_data(b"bearskin\nnematode\nzebra\n".to_vec()))
//!     .unwrap();
//!
//! let lines = engine.solve(["btn", "akd", "oes", "mir"]).unwrap();
//! assert_eq!(lines, vec!["bearskin -> nematode"]);
//!
//! let output = engine.solve_to_string(["btn", "akd", "oes", "mib"]);
//! assert!(output.starts_with("ERROR: "));
//! ```

use crate::config::EngineConfig;
use crate::core::{SIDE_COUNT, Sides};
use crate::dictionary::Dictionary;
use crate::errors::{EngineError, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct Engine {
    dictionary: Option<Dictionary>,
}

impl Engine {
    #[must_use]
    pub const fn new() -> Self {
        Self { dictionary: None }
    }

    /// Engine around an already-loaded dictionary
    #[must_use]
    pub const fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Some(dictionary),
        }
    }

    #[must_use]
    pub const fn is_set_up(&self) -> bool {
        self.dictionary.is_some()
    }

    /// Base dictionary
    ///
    /// # Errors
    /// Returns `EngineError::NotSetUp` before a successful [`Engine::setup`].
    pub fn dictionary(&self) -> Result<&Dictionary> {
        self.dictionary.as_ref().ok_or(EngineError::NotSetUp)
    }

    /// Load the base dictionary
    ///
    /// In-memory `words_data` is used when present. Otherwise a cache next to
    /// the word list is tried first; a missing, stale or malformed cache is
    /// rebuilt from the text. Failing to write the new cache only warns.
    ///
    /// # Errors
    /// Returns an error if the engine is already set up, no source is
    /// configured, a fresh cache exists but cannot be read, or the word list
    /// cannot be loaded.
    pub fn setup(&mut self, config: &EngineConfig) -> Result<()> {
        if self.is_set_up() {
            return Err(EngineError::AlreadySetUp);
        }

        let start = Instant::now();
        let dictionary = if let Some(data) = &config.words_data {
            Dictionary::from_text(data.clone())?
        } else if let Some(words_path) = &config.words_path {
            match config.cache_path() {
                Some(cache_path) => load_with_cache(words_path, &cache_path)?,
                None => Dictionary::load(words_path)?,
            }
        } else {
            return Err(EngineError::NoDictionarySource);
        };

        info!(
            "dictionary ready: {} words in {:.2?}",
            dictionary.len(),
            start.elapsed()
        );
        self.dictionary = Some(dictionary);
        Ok(())
    }

    /// Solve one puzzle, returning ranked display lines
    ///
    /// # Errors
    /// Returns `EngineError::NotSetUp` before setup, or
    /// `EngineError::Puzzle` for malformed sides.
    pub fn solve<S: AsRef<str>>(&self, sides: [S; SIDE_COUNT]) -> Result<Vec<String>> {
        let sides = Sides::parse(sides)?;
        self.solve_sides(&sides)
    }

    /// Solve already-parsed sides
    ///
    /// # Errors
    /// Same as [`Engine::solve`].
    pub fn solve_sides(&self, sides: &Sides) -> Result<Vec<String>> {
        let base = self.dictionary()?;
        let culled = base.culled(sides);
        let mut solutions = culled.solve(sides)?;
        solutions.sort(&culled);
        Ok(solutions.render(&culled))
    }

    /// Solve and flatten the result to text: one solution per line, or
    /// `"ERROR: <message>"`
    #[must_use]
    pub fn solve_to_string<S: AsRef<str>>(&self, sides: [S; SIDE_COUNT]) -> String {
        match self.solve(sides) {
            Ok(lines) => lines.join("\n"),
            Err(e) => format!("ERROR: {e}"),
        }
    }
}

fn load_with_cache(words_path: &Path, cache_path: &Path) -> Result<Dictionary> {
    if cache_is_fresh(words_path, cache_path) {
        match Dictionary::load(cache_path) {
            Ok(dictionary) => {
                debug!("using cache {}", cache_path.display());
                return Ok(dictionary);
            }
            Err(e) if e.is_cache_error() => {
                warn!("ignoring cache {}: {e}", cache_path.display());
            }
            Err(e) => return Err(e),
        }
    }

    let dictionary = Dictionary::load(words_path)?;
    if let Err(e) = dictionary.save(cache_path) {
        warn!("could not write cache {}: {e}", cache_path.display());
    }
    Ok(dictionary)
}

/// Cache exists and is no older than the word list
///
/// A word list that cannot be inspected leaves the decision to the cache.
fn cache_is_fresh(words_path: &Path, cache_path: &Path) -> bool {
    let Ok(cache_modified) = fs::metadata(cache_path).and_then(|m| m.modified()) else {
        return false;
    };
    fs::metadata(words_path)
        .and_then(|m| m.modified())
        .map_or(true, |words_modified| cache_modified >= words_modified)
}
