//! Port for the structured audit trail.
//!
//! Defines the [`AuditLog`] trait for recording arena decisions (rounds
//! opened, arguments submitted, scores, consensus outcomes) to a structured
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port keeps a machine-readable
//! record (JSONL) of everything that changed the arena.

use arena_domain::{ConsensusRecord, ParticipantId, PeriodId, ScoreCard, Side};
use serde_json::{Value, json};

/// A structured audit event.
///
/// Each event has a type string and a JSON payload with event-specific
/// fields. The adapter adds the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEvent {
    /// Event type identifier (e.g. "round_opened", "participant_scored").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AuditEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn round_opened(period: &PeriodId, topic: &str, side_a: &str, side_b: &str) -> Self {
        Self::new(
            "round_opened",
            json!({
                "period_id": period,
                "topic": topic,
                "side_a": side_a,
                "side_b": side_b,
            }),
        )
    }

    pub fn argument_submitted(
        period: &PeriodId,
        participant: &ParticipantId,
        side: Side,
        chars: usize,
        first: bool,
    ) -> Self {
        Self::new(
            "argument_submitted",
            json!({
                "period_id": period,
                "participant": participant,
                "side": side,
                "chars": chars,
                "first_submission": first,
            }),
        )
    }

    pub fn participant_scored(participant: &ParticipantId, card: &ScoreCard) -> Self {
        Self::new(
            "participant_scored",
            json!({
                "participant": participant,
                "card": card,
                "period_score": card.period_score(),
            }),
        )
    }

    pub fn round_judged(period: &PeriodId, participants: usize) -> Self {
        Self::new(
            "round_judged",
            json!({
                "period_id": period,
                "participants": participants,
            }),
        )
    }

    /// `consensus_reached` or `consensus_failed`, depending on the outcome.
    pub fn consensus(record: &ConsensusRecord) -> Self {
        let event_type = if record.outcome.is_agreed() {
            "consensus_reached"
        } else {
            "consensus_failed"
        };
        let payload = serde_json::to_value(record).unwrap_or(Value::Null);
        Self::new(event_type, payload)
    }
}

/// Port for logging audit events.
///
/// Implementations write each event as a single record (e.g. one JSONL line).
/// `log` is synchronous and non-fallible; write failures are dropped so that
/// auditing never changes the outcome of an arena operation.
pub trait AuditLog: Send + Sync {
    fn log(&self, event: AuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoAuditLog;

impl AuditLog for NoAuditLog {
    fn log(&self, _event: AuditEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_domain::{ConsensusOutcome, EquivalenceMode};

    #[test]
    fn test_consensus_event_type_follows_outcome() {
        let agreed = ConsensusRecord::new("fetch_topic", EquivalenceMode::ExactMatch, 3)
            .finish(ConsensusOutcome::Agreed);
        assert_eq!(AuditEvent::consensus(&agreed).event_type, "consensus_reached");

        let diverged = ConsensusRecord::new("fetch_topic", EquivalenceMode::ExactMatch, 3)
            .finish(ConsensusOutcome::Diverged);
        let event = AuditEvent::consensus(&diverged);
        assert_eq!(event.event_type, "consensus_failed");
        assert_eq!(event.payload["outcome"], "diverged");
        assert_eq!(event.payload["operation"], "fetch_topic");
    }

    #[test]
    fn test_submission_payload() {
        let event = AuditEvent::argument_submitted(
            &"2025-W10".parse().unwrap(),
            &ParticipantId::new("alice"),
            Side::B,
            42,
            true,
        );
        assert_eq!(event.payload["period_id"], "2025-W10");
        assert_eq!(event.payload["participant"], "alice");
        assert_eq!(event.payload["side"], "b");
        assert_eq!(event.payload["first_submission"], true);
    }
}
