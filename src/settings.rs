//! Game settings as an explicit state object.
//!
//! Settings are built once at start-up (from CLI flags) and handed to the
//! functions that need them by reference.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_TRIES: usize = 6;
pub const DEFAULT_WORD_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("tries must be greater than 1, got {0}")]
    InvalidTries(usize),
    #[error("word_length must be greater than 1, got {0}")]
    InvalidWordLength(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    tries: usize,
    word_length: usize,
    /// `None` selects the embedded word list
    wordbank_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tries: DEFAULT_TRIES,
            word_length: DEFAULT_WORD_LENGTH,
            wordbank_path: None,
        }
    }
}

impl Settings {
    /// # Errors
    /// Rejects `tries` or `word_length` of 1 or less.
    pub fn new(
        tries: usize,
        word_length: usize,
        wordbank_path: Option<PathBuf>,
    ) -> Result<Self, SettingsError> {
        if tries <= 1 {
            return Err(SettingsError::InvalidTries(tries));
        }
        if word_length <= 1 {
            return Err(SettingsError::InvalidWordLength(word_length));
        }
        Ok(Self {
            tries,
            word_length,
            wordbank_path,
        })
    }

    #[must_use]
    pub fn tries(&self) -> usize {
        self.tries
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn wordbank_path(&self) -> Option<&PathBuf> {
        self.wordbank_path.as_ref()
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tries: {}", self.tries)?;
        writeln!(f, "word_length: {}", self.word_length)?;
        match &self.wordbank_path {
            Some(path) => write!(f, "wordbank: {}", path.display()),
            None => write!(f, "wordbank: (embedded)"),
        }
    }
}
