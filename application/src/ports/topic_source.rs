//! Topic source port
//!
//! Read-only fetch of the public content a round's topic is derived from.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Response too large ({size} bytes, max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Could not decode response: {0}")]
    Decode(String),
}

/// Source of public text for topic generation.
#[async_trait]
pub trait TopicSource: Send + Sync {
    /// Fetch the current page as plain text.
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Where the text comes from, for logs.
    fn describe(&self) -> String;
}
