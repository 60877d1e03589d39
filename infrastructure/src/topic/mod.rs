//! Topic source adapters

mod html;
mod http_source;

pub use html::html_to_text;
pub use http_source::{HttpTopicSource, MAX_BODY_SIZE};
