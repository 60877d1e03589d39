//! Round entity and its read-side snapshot

use super::period::PeriodId;
use crate::submission::Side;
use serde::{Deserialize, Serialize};

/// The live round.
///
/// `is_open` and `is_judged` are independent flags; the state machine keeps
/// them mutually exclusive but every gate checks both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub period_id: PeriodId,
    pub topic: String,
    pub position_a: String,
    pub position_b: String,
    pub is_open: bool,
    pub is_judged: bool,
}

impl Round {
    /// A freshly opened round.
    pub fn opened(
        period_id: PeriodId,
        topic: impl Into<String>,
        position_a: impl Into<String>,
        position_b: impl Into<String>,
    ) -> Self {
        Self {
            period_id,
            topic: topic.into(),
            position_a: position_a.into(),
            position_b: position_b.into(),
            is_open: true,
            is_judged: false,
        }
    }

    /// The position text argued by `side`.
    pub fn position(&self, side: Side) -> &str {
        match side {
            Side::A => &self.position_a,
            Side::B => &self.position_b,
        }
    }
}

/// Read-only view of the current round for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub period_id: PeriodId,
    pub topic: String,
    pub side_a: String,
    pub side_b: String,
    pub round_open: bool,
    pub judging_done: bool,
    pub participant_count: usize,
}
