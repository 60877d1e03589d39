//! In-memory state store, for `--no-config` dry runs and tests.

use arena_application::ports::state_store::{StateStore, StoreError};
use arena_domain::ArenaState;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<Option<ArenaState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<ArenaState>, StoreError> {
        self.state
            .lock()
            .map(|s| s.clone())
            .map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn save(&self, state: &ArenaState) -> Result<(), StoreError> {
        let mut slot = self
            .state
            .lock()
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        *slot = Some(state.clone());
        Ok(())
    }
}
