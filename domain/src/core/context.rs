//! Per-call execution context

use super::participant::ParticipantId;
use chrono::{DateTime, Utc};

/// Who is calling and when.
///
/// Built by the outermost layer (CLI, RPC handler) for every invocation and
/// passed down unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub caller: ParticipantId,
    pub now: DateTime<Utc>,
}

impl CallContext {
    pub fn new(caller: ParticipantId, now: DateTime<Utc>) -> Self {
        Self { caller, now }
    }

    /// Context stamped with the current wall-clock time.
    pub fn now(caller: ParticipantId) -> Self {
        Self::new(caller, Utc::now())
    }
}
