//! Submit Argument use case

use crate::ports::audit_log::{AuditEvent, AuditLog};
use arena_domain::{ArenaError, ArenaState, ParticipantId};
use std::sync::Arc;
use tracing::info;

pub struct SubmitArgumentUseCase {
    audit: Arc<dyn AuditLog>,
}

impl SubmitArgumentUseCase {
    pub fn new(audit: Arc<dyn AuditLog>) -> Self {
        Self { audit }
    }

    /// Record `caller`'s argument for `side` ("a" or "b").
    ///
    /// Resubmitting while the round is open replaces the earlier argument
    /// and keeps the caller's place in the roster.
    pub fn execute(
        &self,
        state: &mut ArenaState,
        caller: &ParticipantId,
        side: &str,
        text: &str,
    ) -> Result<String, ArenaError> {
        let first = state.submit(caller, side, text)?;

        if let Some(submission) = state.ledger().get(caller) {
            self.audit.log(AuditEvent::argument_submitted(
                &state.round().period_id,
                caller,
                submission.side,
                submission.text.char_count(),
                first,
            ));
            info!(
                "{} {} an argument for side {} ({} participants)",
                caller,
                if first { "submitted" } else { "replaced" },
                submission.side,
                state.ledger().len()
            );
        }

        Ok("Argument submitted! Wait for the host to call judge_all().".to_string())
    }
}
