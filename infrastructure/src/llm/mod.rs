//! Scoring oracle adapters

mod openai_gateway;
mod protocol;

pub use openai_gateway::{OpenAiCompatGateway, OpenAiSession, OpenAiSettings};
