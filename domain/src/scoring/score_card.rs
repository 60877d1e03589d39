//! Score card parsing.
//!
//! The scoring oracle answers in free text that is expected to hold a JSON
//! object. Parsing is strict: a missing field, a non-integer, an out-of-range
//! component or a total that does not add up is an error, never a default.

use crate::util::strip_code_fences;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const LOGIC_MAX: i64 = 40;
pub const CREATIVITY_MAX: i64 = 30;
pub const PERSUASIVENESS_MAX: i64 = 30;

/// Errors raised while validating an oracle score answer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreCardError {
    #[error("Malformed score JSON: {0}")]
    Malformed(String),

    #[error("{field} = {value} is outside 0-{max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        max: i64,
    },

    #[error("total {total} does not equal component sum {sum}")]
    TotalMismatch { total: i64, sum: i64 },

    #[error("one_line_feedback is empty")]
    MissingFeedback,
}

/// A validated score for one argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub logic: i64,
    pub creativity: i64,
    pub persuasiveness: i64,
    pub total: i64,
    pub one_line_feedback: String,
}

impl ScoreCard {
    /// Parse and validate a raw oracle answer.
    ///
    /// Markdown code fences around the JSON are tolerated.
    ///
    /// # Example
    ///
    /// ```
    /// use arena_domain::ScoreCard;
    ///
    /// let raw = r#"{"logic": 30, "creativity": 20, "persuasiveness": 22,
    ///   "total": 72, "one_line_feedback": "Clear and well supported."}"#;
    /// let card = ScoreCard::parse(raw).unwrap();
    /// assert_eq!(card.period_score(), 72);
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ScoreCardError> {
        let json = strip_code_fences(raw);
        let card: ScoreCard =
            serde_json::from_str(&json).map_err(|e| ScoreCardError::Malformed(e.to_string()))?;
        card.validate()?;
        Ok(card)
    }

    fn validate(&self) -> Result<(), ScoreCardError> {
        for (field, value, max) in [
            ("logic", self.logic, LOGIC_MAX),
            ("creativity", self.creativity, CREATIVITY_MAX),
            ("persuasiveness", self.persuasiveness, PERSUASIVENESS_MAX),
        ] {
            if !(0..=max).contains(&value) {
                return Err(ScoreCardError::OutOfRange { field, value, max });
            }
        }

        let sum = self.logic + self.creativity + self.persuasiveness;
        if self.total != sum {
            return Err(ScoreCardError::TotalMismatch {
                total: self.total,
                sum,
            });
        }

        if self.one_line_feedback.trim().is_empty() {
            return Err(ScoreCardError::MissingFeedback);
        }
        Ok(())
    }

    /// Points awarded for the round, clamped into 0-100.
    pub fn period_score(&self) -> u32 {
        self.total.clamp(0, 100) as u32
    }
}
