//! Topic source configuration from TOML (`[topic]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTopicConfig {
    /// Page the debate topic is drawn from
    pub url: String,
    /// Characters of page text handed to the oracle
    pub max_chars: usize,
    /// HTTP timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileTopicConfig {
    fn default() -> Self {
        Self {
            url: "https://news.ycombinator.com".to_string(),
            max_chars: 3000,
            timeout_seconds: 30,
        }
    }
}
