//! Settings for reading problem instances.

use std::env;

use log::warn;

/// The environment variable that overrides [`LoadOptions::max_word_len`].
pub const MAX_WORD_LEN_VAR: &str = "CYK_MAX_WORD_LEN";

const DEFAULT_MAX_WORD_LEN: usize = 50;

/// Settings for reading problem instances.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LoadOptions {
    /// Longest accepted candidate word, in symbols.
    pub max_word_len: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

impl LoadOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the longest accepted candidate word.
    pub fn max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Creates the default options, overridden by the `CYK_MAX_WORD_LEN`
    /// environment variable when it holds a number.
    pub fn from_env() -> Self {
        let options = Self::default();
        match env::var(MAX_WORD_LEN_VAR) {
            Ok(value) => match value.trim().parse() {
                Ok(max_word_len) => options.max_word_len(max_word_len),
                Err(_) => {
                    warn!("ignoring {}={:?}: not a number", MAX_WORD_LEN_VAR, value);
                    options
                }
            },
            Err(_) => options,
        }
    }
}
