//! Topic proposal parsing and canonical serialization

use crate::util::strip_code_fences;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while reading a topic proposal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicError {
    #[error("Malformed topic JSON: {0}")]
    Malformed(String),

    #[error("Topic answer is not a JSON object")]
    NotAnObject,

    #[error("Topic field '{0}' is missing or empty")]
    MissingField(&'static str),
}

/// A debate topic with its two opposing positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicProposal {
    pub side_a: String,
    pub side_b: String,
    pub topic: String,
}

impl TopicProposal {
    /// Turn a raw model answer into canonical JSON.
    ///
    /// Code fences are stripped, the object is validated, and it is
    /// re-serialized compactly with keys in sorted order. Two validators that
    /// received semantically equal answers therefore emit identical bytes
    /// regardless of the key order the model chose.
    ///
    /// ```
    /// use arena_domain::TopicProposal;
    ///
    /// let a = TopicProposal::canonicalize(
    ///     r#"{"topic": "T", "side_b": "No", "side_a": "Yes"}"#,
    /// ).unwrap();
    /// let b = TopicProposal::canonicalize(
    ///     r#"{ "side_a": "Yes", "topic": "T", "side_b": "No" }"#,
    /// ).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a, r#"{"side_a":"Yes","side_b":"No","topic":"T"}"#);
    /// ```
    pub fn canonicalize(raw: &str) -> Result<String, TopicError> {
        let cleaned = strip_code_fences(raw);
        let value: Value =
            serde_json::from_str(&cleaned).map_err(|e| TopicError::Malformed(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(TopicError::NotAnObject);
        };

        let sorted: BTreeMap<String, Value> = map.into_iter().collect();
        let canonical =
            serde_json::to_string(&sorted).map_err(|e| TopicError::Malformed(e.to_string()))?;

        // Reject incomplete proposals before they reach consensus
        Self::from_canonical(&canonical)?;
        Ok(canonical)
    }

    /// Read back a canonical (or any well-formed) proposal.
    pub fn from_canonical(json: &str) -> Result<Self, TopicError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| TopicError::Malformed(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(TopicError::NotAnObject);
        };

        let field = |name: &'static str| -> Result<String, TopicError> {
            map.get(name)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or(TopicError::MissingField(name))
        };

        Ok(Self {
            topic: field("topic")?,
            side_a: field("side_a")?,
            side_b: field("side_b")?,
        })
    }
}
