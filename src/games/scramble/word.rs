//! Round input: a target word and its hint.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument};

/// A validated target word with its hint.
///
/// `word` is always non-empty and made only of `A`–`Z`; `hint` is always
/// non-empty. The only way to get one is through [`WordData::new`] or
/// [`WordData::sanitized`], so a round never sees malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Getters)]
pub struct WordData {
    word: String,
    hint: String,
}

impl WordData {
    /// Creates a word entry, validating both fields as given.
    ///
    /// # Errors
    ///
    /// Returns [`WordError`] if the word is empty or contains anything other
    /// than `A`–`Z`, or if the hint is blank.
    #[track_caller]
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Result<Self, WordError> {
        let word = word.into();
        let hint = hint.into();

        if word.is_empty() {
            return Err(WordError::new("word is empty".to_string()));
        }
        if !word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::new(format!(
                "word '{}' must contain only A-Z",
                word
            )));
        }
        if hint.trim().is_empty() {
            return Err(WordError::new(format!("hint for '{}' is empty", word)));
        }

        Ok(Self { word, hint })
    }

    /// Normalizes raw provider output into a word entry.
    ///
    /// Trims both fields and uppercases the word. Returns `None` when the
    /// result would not be valid.
    #[instrument]
    pub fn sanitized(raw_word: &str, raw_hint: &str) -> Option<Self> {
        let word = raw_word.trim().to_uppercase();
        let hint = raw_hint.trim().to_string();
        match Self::new(word, hint) {
            Ok(data) => Some(data),
            Err(e) => {
                debug!(raw_word, error = %e.message, "Discarding candidate word");
                None
            }
        }
    }

    /// Number of letters (and therefore slots) in the word.
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Always false; a valid word has at least one letter.
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Invalid word entry.
#[derive(Debug, Clone, Display, Error)]
#[display("Word error: {} at {}:{}", message, file, line)]
pub struct WordError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordError {
    /// Creates a new word error with caller location tracking.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_lowercase_and_symbols() {
        assert!(WordData::new("react", "hint").is_err());
        assert!(WordData::new("RE-ACT", "hint").is_err());
        assert!(WordData::new("", "hint").is_err());
        assert!(WordData::new("REACT", "   ").is_err());
        assert!(WordData::new("REACT", "A UI library").is_ok());
    }

    #[test]
    fn test_sanitized_trims_and_uppercases() {
        let data = WordData::sanitized("  photon \n", "  A particle of light. ").unwrap();
        assert_eq!(data.word(), "PHOTON");
        assert_eq!(data.hint(), "A particle of light.");
        assert_eq!(data.len(), 6);
    }

    #[test]
    fn test_sanitized_drops_non_alphabetic() {
        assert!(WordData::sanitized("ice cream", "Cold dessert").is_none());
        assert!(WordData::sanitized("CO2", "A gas").is_none());
        assert!(WordData::sanitized("café", "Coffee shop").is_none());
        assert!(WordData::sanitized("   ", "Nothing").is_none());
    }
}
