//! Equivalence modes

use serde::{Deserialize, Serialize};

/// How validators must agree on an oracle result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquivalenceMode {
    /// All validators reproduce byte-identical output.
    ExactMatch,
    /// Validators judge a single proposal against stated criteria.
    Tolerant,
}

impl EquivalenceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquivalenceMode::ExactMatch => "exact_match",
            EquivalenceMode::Tolerant => "tolerant",
        }
    }
}

impl std::fmt::Display for EquivalenceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
