//! Period and lifetime score books

use crate::core::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scores of the current round (0-100 each). Cleared when a new round opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodScores(HashMap<ParticipantId, u32>);

impl PeriodScores {
    pub fn record(&mut self, participant: ParticipantId, score: u32) {
        self.0.insert(participant, score);
    }

    /// Score for the round, `0` when the participant was not scored.
    pub fn get(&self, participant: &ParticipantId) -> u32 {
        self.0.get(participant).copied().unwrap_or(0)
    }

    pub fn is_scored(&self, participant: &ParticipantId) -> bool {
        self.0.contains_key(participant)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Lifetime points across every round ever judged.
///
/// Never cleared. Besides the totals it remembers the order in which
/// participants were first credited, which gives the all-time leaderboard a
/// deterministic tie-break even after the per-round roster is gone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeBook {
    order: Vec<ParticipantId>,
    totals: HashMap<ParticipantId, u64>,
}

impl LifetimeBook {
    /// Add `points` to a participant's lifetime total and return the new total.
    pub fn credit(&mut self, participant: &ParticipantId, points: u32) -> u64 {
        if !self.totals.contains_key(participant) {
            self.order.push(participant.clone());
        }
        let total = self.totals.entry(participant.clone()).or_insert(0);
        *total = total.saturating_add(u64::from(points));
        *total
    }

    pub fn get(&self, participant: &ParticipantId) -> u64 {
        self.totals.get(participant).copied().unwrap_or(0)
    }

    /// `(participant, total)` pairs in first-credited order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, u64)> {
        self.order
            .iter()
            .map(|p| (p, self.totals.get(p).copied().unwrap_or(0)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_default_zero() {
        let scores = PeriodScores::default();
        assert_eq!(scores.get(&ParticipantId::new("nobody")), 0);
        assert!(!scores.is_scored(&ParticipantId::new("nobody")));
    }

    #[test]
    fn test_lifetime_accumulates() {
        let mut book = LifetimeBook::default();
        let alice = ParticipantId::new("alice");

        assert_eq!(book.credit(&alice, 40), 40);
        assert_eq!(book.credit(&alice, 0), 40);
        assert_eq!(book.credit(&alice, 35), 75);
        assert_eq!(book.get(&alice), 75);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_lifetime_first_credit_order() {
        let mut book = LifetimeBook::default();
        book.credit(&ParticipantId::new("carol"), 10);
        book.credit(&ParticipantId::new("alice"), 10);
        book.credit(&ParticipantId::new("carol"), 10);

        let order: Vec<_> = book.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(order, vec!["carol", "alice"]);
    }
}
