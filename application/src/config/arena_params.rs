//! Arena parameters: use case tuning.
//!
//! [`ArenaParams`] groups the static parameters the use cases read. These
//! are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Default number of characters of fetched page text given to the oracle.
pub const DEFAULT_TOPIC_MAX_CHARS: usize = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaParams {
    /// Page text is cut to this many characters before prompting.
    pub topic_max_chars: usize,
}

impl Default for ArenaParams {
    fn default() -> Self {
        Self {
            topic_max_chars: DEFAULT_TOPIC_MAX_CHARS,
        }
    }
}

impl ArenaParams {
    pub fn with_topic_max_chars(mut self, max: usize) -> Self {
        self.topic_max_chars = max;
        self
    }
}
