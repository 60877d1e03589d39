//! Argument text bounds

use crate::core::error::ArenaError;
use serde::{Deserialize, Serialize};

/// Minimum argument length, in characters.
pub const MIN_ARGUMENT_CHARS: usize = 20;

/// Maximum argument length, in characters.
pub const MAX_ARGUMENT_CHARS: usize = 600;

/// A validated argument (Value Object)
///
/// Length is counted in Unicode scalar values, not bytes, so a 20-character
/// argument in any script is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentText(String);

impl ArgumentText {
    pub fn parse(text: impl Into<String>) -> Result<Self, ArenaError> {
        let text = text.into();
        let len = text.chars().count();
        if len < MIN_ARGUMENT_CHARS {
            return Err(ArenaError::TextTooShort {
                len,
                min: MIN_ARGUMENT_CHARS,
            });
        }
        if len > MAX_ARGUMENT_CHARS {
            return Err(ArenaError::TextTooLong {
                len,
                max: MAX_ARGUMENT_CHARS,
            });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for ArgumentText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_boundaries() {
        assert_eq!(
            ArgumentText::parse("x".repeat(19)).unwrap_err(),
            ArenaError::TextTooShort { len: 19, min: 20 }
        );
        assert!(ArgumentText::parse("x".repeat(20)).is_ok());
        assert!(ArgumentText::parse("x".repeat(600)).is_ok());
        assert_eq!(
            ArgumentText::parse("x".repeat(601)).unwrap_err(),
            ArenaError::TextTooLong { len: 601, max: 600 }
        );
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 20 three-byte characters
        let text = "論".repeat(20);
        assert_eq!(text.len(), 60);
        let parsed = ArgumentText::parse(text).unwrap();
        assert_eq!(parsed.char_count(), 20);

        // 600 two-byte characters: 1200 bytes, still in bounds
        assert!(ArgumentText::parse("é".repeat(600)).is_ok());
    }
}
