//! HTTP topic source
//!
//! Fetches a configured page and hands back its readable text.

use super::html::html_to_text;
use arena_application::ports::topic_source::{SourceError, TopicSource};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Maximum response body size (5 MB)
pub const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

const USER_AGENT: &str = concat!("VerdictArena/", env!("CARGO_PKG_VERSION"));

pub struct HttpTopicSource {
    client: reqwest::Client,
    url: String,
}

impl HttpTopicSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SourceError::Request(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl TopicSource for HttpTopicSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        if let Some(len) = response.content_length() {
            if len > MAX_BODY_SIZE as u64 {
                return Err(SourceError::TooLarge {
                    size: len as usize,
                    max: MAX_BODY_SIZE,
                });
            }
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        if body.len() > MAX_BODY_SIZE {
            return Err(SourceError::TooLarge {
                size: body.len(),
                max: MAX_BODY_SIZE,
            });
        }

        let text = String::from_utf8_lossy(&body);
        debug!(
            "Fetched {} ({} bytes, {})",
            self.url,
            body.len(),
            content_type
        );

        if content_type.contains("text/html") || content_type.contains("application/xhtml") {
            Ok(html_to_text(&text))
        } else {
            Ok(text.into_owned())
        }
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
