//! Submission ledger and roster

use super::side::Side;
use super::text::ArgumentText;
use crate::core::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A participant's argument for the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub participant: ParticipantId,
    pub side: Side,
    pub text: ArgumentText,
}

impl Submission {
    pub fn new(participant: ParticipantId, side: Side, text: ArgumentText) -> Self {
        Self {
            participant,
            side,
            text,
        }
    }
}

/// Submissions of the current round, keyed by participant.
///
/// The roster records each participant once, in the order they first
/// submitted. Resubmitting replaces the entry but keeps the roster position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionLedger {
    roster: Vec<ParticipantId>,
    entries: HashMap<ParticipantId, Submission>,
}

impl SubmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a submission. Returns `true` if the participant is
    /// new to this round.
    pub fn upsert(&mut self, submission: Submission) -> bool {
        let is_new = !self.entries.contains_key(&submission.participant);
        if is_new {
            self.roster.push(submission.participant.clone());
        }
        self.entries.insert(submission.participant.clone(), submission);
        is_new
    }

    pub fn get(&self, participant: &ParticipantId) -> Option<&Submission> {
        self.entries.get(participant)
    }

    pub fn contains(&self, participant: &ParticipantId) -> bool {
        self.entries.contains_key(participant)
    }

    /// Participants in first-seen order.
    pub fn roster(&self) -> &[ParticipantId] {
        &self.roster
    }

    /// Submissions in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Submission> {
        self.roster.iter().filter_map(|p| self.entries.get(p))
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}
