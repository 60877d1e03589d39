//! Arena state machine
//!
//! [`ArenaState`] owns every piece of persistent arena state and exposes the
//! transitions as methods. Oracle work (topic fetch, scoring) happens outside;
//! the results are handed in already agreed, so every method here is
//! synchronous and either applies completely or not at all.

use crate::core::context::CallContext;
use crate::core::error::ArenaError;
use crate::core::participant::ParticipantId;
use crate::round::{PeriodId, Round, RoundSnapshot};
use crate::scoring::{LifetimeBook, PeriodScores, ScoringRequest, Verdict};
use crate::submission::{ArgumentText, Side, Submission, SubmissionLedger};
use crate::topic::TopicProposal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Complete arena state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaState {
    host: ParticipantId,
    round: Round,
    ledger: SubmissionLedger,
    period_scores: PeriodScores,
    lifetime: LifetimeBook,
}

impl ArenaState {
    /// Fresh state; the deploying identity becomes the host.
    pub fn new(host: ParticipantId) -> Self {
        Self {
            host,
            round: Round::default(),
            ledger: SubmissionLedger::default(),
            period_scores: PeriodScores::default(),
            lifetime: LifetimeBook::default(),
        }
    }

    // ==================== Accessors ====================

    pub fn host(&self) -> &ParticipantId {
        &self.host
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn ledger(&self) -> &SubmissionLedger {
        &self.ledger
    }

    pub fn period_scores(&self) -> &PeriodScores {
        &self.period_scores
    }

    pub fn lifetime(&self) -> &LifetimeBook {
        &self.lifetime
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            period_id: self.round.period_id.clone(),
            topic: self.round.topic.clone(),
            side_a: self.round.position_a.clone(),
            side_b: self.round.position_b.clone(),
            round_open: self.round.is_open,
            judging_done: self.round.is_judged,
            participant_count: self.ledger.len(),
        }
    }

    // ==================== Opening ====================

    /// Gate checks for opening a round. Returns the period that would be
    /// opened; no state changes.
    pub fn check_open(&self, ctx: &CallContext) -> Result<PeriodId, ArenaError> {
        self.ensure_host(&ctx.caller, "open rounds")?;
        if self.round.is_open {
            return Err(ArenaError::RoundAlreadyOpen {
                period: self.round.period_id.to_string(),
            });
        }
        let period = PeriodId::from_datetime(&ctx.now);
        if period == self.round.period_id {
            return Err(ArenaError::PeriodAlreadyPlayed {
                period: period.to_string(),
            });
        }
        Ok(period)
    }

    /// Start a new round with an agreed topic.
    ///
    /// Replaces the round and clears the ledger and period scores together.
    /// Lifetime scores are untouched.
    pub fn open_round(
        &mut self,
        ctx: &CallContext,
        topic: TopicProposal,
    ) -> Result<PeriodId, ArenaError> {
        let period = self.check_open(ctx)?;
        self.round = Round::opened(period.clone(), topic.topic, topic.side_a, topic.side_b);
        self.ledger = SubmissionLedger::default();
        self.period_scores = PeriodScores::default();
        Ok(period)
    }

    // ==================== Submitting ====================

    /// Record a participant's argument. Returns `true` if this is the
    /// participant's first submission of the round.
    pub fn submit(
        &mut self,
        caller: &ParticipantId,
        side: &str,
        text: &str,
    ) -> Result<bool, ArenaError> {
        if !self.round.is_open {
            return Err(ArenaError::RoundNotOpen);
        }
        if self.round.is_judged {
            return Err(ArenaError::AlreadyJudged);
        }
        let side: Side = side.parse()?;
        let text = ArgumentText::parse(text)?;

        Ok(self.ledger.upsert(Submission::new(caller.clone(), side, text)))
    }

    // ==================== Judging ====================

    /// Gate checks for judging, and the scoring requests in roster order.
    pub fn scoring_requests(
        &self,
        caller: &ParticipantId,
    ) -> Result<Vec<ScoringRequest>, ArenaError> {
        self.ensure_host(caller, "trigger judging")?;
        self.ensure_judgeable()?;
        if self.ledger.is_empty() {
            return Err(ArenaError::NoSubmissions);
        }

        Ok(self
            .ledger
            .iter()
            .map(|s| ScoringRequest {
                participant: s.participant.clone(),
                topic: self.round.topic.clone(),
                side: s.side,
                position: self.round.position(s.side).to_string(),
                argument: s.text.as_str().to_string(),
            })
            .collect())
    }

    /// Commit a complete set of verdicts and close the round.
    ///
    /// The verdicts must cover the roster exactly: one per participant, no
    /// strangers, nobody missing. Validation happens before the first write,
    /// so an error leaves the state untouched.
    pub fn commit_verdicts(&mut self, verdicts: &[Verdict]) -> Result<(), ArenaError> {
        self.ensure_judgeable()?;

        let mut seen = HashSet::with_capacity(verdicts.len());
        for verdict in verdicts {
            if !self.ledger.contains(&verdict.participant) {
                return Err(ArenaError::OracleUnavailable(format!(
                    "verdict for {} who has no submission this round",
                    verdict.participant
                )));
            }
            if !seen.insert(&verdict.participant) {
                return Err(ArenaError::OracleUnavailable(format!(
                    "more than one verdict for {}",
                    verdict.participant
                )));
            }
        }
        if let Some(missing) = self.ledger.roster().iter().find(|p| !seen.contains(p)) {
            return Err(ArenaError::OracleUnavailable(format!("no verdict for {}", missing)));
        }

        for verdict in verdicts {
            let score = verdict.score();
            self.period_scores.record(verdict.participant.clone(), score);
            self.lifetime.credit(&verdict.participant, score);
        }
        self.round.is_open = false;
        self.round.is_judged = true;
        Ok(())
    }

    // ==================== Gates ====================

    fn ensure_host(&self, caller: &ParticipantId, action: &'static str) -> Result<(), ArenaError> {
        if caller != &self.host {
            return Err(ArenaError::Unauthorized {
                caller: caller.to_string(),
                action,
            });
        }
        Ok(())
    }

    fn ensure_judgeable(&self) -> Result<(), ArenaError> {
        if !self.round.is_open {
            return Err(ArenaError::RoundNotOpen);
        }
        if self.round.is_judged {
            return Err(ArenaError::AlreadyJudged);
        }
        Ok(())
    }
}
