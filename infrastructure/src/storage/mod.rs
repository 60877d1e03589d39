//! State store adapters

mod json_store;
mod memory_store;

pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
