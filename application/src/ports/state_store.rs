//! State persistence port

use arena_domain::ArenaState;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Stored state is corrupt: {0}")]
    Corrupt(String),
}

/// Load/save of the whole arena state.
///
/// `save` must be all-or-nothing: after a failed save, `load` still returns
/// the previous state.
pub trait StateStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<ArenaState>, StoreError>;

    fn save(&self, state: &ArenaState) -> Result<(), StoreError>;
}
