//! Per-participant scoring request and its outcome

use super::score_card::ScoreCard;
use crate::core::participant::ParticipantId;
use crate::prompt::PromptTemplate;
use crate::submission::Side;

/// Everything the scoring oracle needs to judge one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRequest {
    pub participant: ParticipantId,
    pub topic: String,
    pub side: Side,
    /// Position text resolved from `side`
    pub position: String,
    pub argument: String,
}

impl ScoringRequest {
    /// Prompt sent to the scoring model.
    pub fn prompt(&self) -> String {
        PromptTemplate::scoring_prompt(&self.topic, &self.position, &self.argument)
    }

    /// Task description handed to validators in tolerant mode.
    pub fn task_description(&self) -> String {
        PromptTemplate::scoring_task(&self.topic)
    }
}

/// An accepted score for one participant, not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub participant: ParticipantId,
    pub card: ScoreCard,
}

impl Verdict {
    pub fn new(participant: ParticipantId, card: ScoreCard) -> Self {
        Self { participant, card }
    }

    pub fn score(&self) -> u32 {
        self.card.period_score()
    }
}
