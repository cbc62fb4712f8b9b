//! Engine configuration
//!
//! [`EngineConfig`] says where the dictionary comes from. The CLI fills it
//! from [`DictionaryArgs`], which reads `LBX_WORDS` and `LBX_CACHE_DIR` from
//! the environment when the flags are absent.

use crate::dictionary::CACHE_EXTENSION;
use crate::wordlists::loader::sample_text;
use clap::Args;
use std::path::{Path, PathBuf};

/// Word list used when none is configured
pub const DEFAULT_WORDS_PATH: &str = "words_alpha.txt";

/// Dictionary source for [`crate::engine::Engine::setup`]
///
/// `words_data` wins over `words_path` when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Sorted word list on disk (`.txt`)
    pub words_path: Option<PathBuf>,
    /// Where `.pre` caches live; defaults to the word list's directory
    pub cache_dir: Option<PathBuf>,
    /// In-memory word list text
    pub words_data: Option<Vec<u8>>,
}

impl EngineConfig {
    #[must_use]
    pub fn from_path(words_path: impl Into<PathBuf>) -> Self {
        Self {
            words_path: Some(words_path.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_data(words_data: Vec<u8>) -> Self {
        Self {
            words_data: Some(words_data),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(cache_dir.into());
        self
    }

    /// Cache file matching the word list: `<cache_dir>/<stem>.pre`
    ///
    /// `None` when there is no word list path to name it after.
    #[must_use]
    pub fn cache_path(&self) -> Option<PathBuf> {
        let words_path = self.words_path.as_deref()?;
        let stem = words_path.file_stem()?;
        let dir = self
            .cache_dir
            .as_deref()
            .or_else(|| words_path.parent())
            .unwrap_or_else(|| Path::new(""));
        let mut file_name = stem.to_os_string();
        file_name.push(".");
        file_name.push(CACHE_EXTENSION);
        Some(dir.join(file_name))
    }
}

/// Dictionary options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct DictionaryArgs {
    /// Sorted, newline-separated word list
    #[arg(short = 'w', long, global = true, env = "LBX_WORDS")]
    pub words: Option<PathBuf>,

    /// Directory for preprocessed `.pre` caches (default: next to the word list)
    #[arg(long, global = true, env = "LBX_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Use the small dictionary built into the binary
    #[arg(long, global = true, conflicts_with = "words")]
    pub sample: bool,
}

impl DictionaryArgs {
    /// Build the engine configuration these options describe
    #[must_use]
    pub fn to_config(&self) -> EngineConfig {
        if self.sample {
            return EngineConfig::from_data(sample_text());
        }
        EngineConfig {
            words_path: Some(
                self.words
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDS_PATH)),
            ),
            cache_dir: self.cache_dir.clone(),
            words_data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_defaults_to_word_list_dir() {
        let config = EngineConfig::from_path("/data/words_alpha.txt");
        assert_eq!(
            config.cache_path(),
            Some(PathBuf::from("/data/words_alpha.pre"))
        );
    }

    #[test]
    fn cache_path_honours_cache_dir() {
        let config = EngineConfig::from_path("/data/words_alpha.txt").with_cache_dir("/tmp/lbx");
        assert_eq!(
            config.cache_path(),
            Some(PathBuf::from("/tmp/lbx/words_alpha.pre"))
        );
    }

    #[test]
    fn cache_path_for_bare_file_name() {
        let config = EngineConfig::from_path("words_alpha.txt");
        assert_eq!(config.cache_path(), Some(PathBuf::from("words_alpha.pre")));
    }

    #[test]
    fn no_cache_for_in_memory_words() {
        assert_eq!(
            EngineConfig::from_data(b"cat\n".to_vec()).cache_path(),
            None
        );
    }

    #[test]
    fn args_to_config() {
        let args = DictionaryArgs::default();
        let config = args.to_config();
        assert_eq!(config.words_path, Some(PathBuf::from(DEFAULT_WORDS_PATH)));
        assert!(config.words_data.is_none());

        let args = DictionaryArgs {
            sample: true,
            ..DictionaryArgs::default()
        };
        assert!(args.to_config().words_data.is_some());
    }
}
