//! Judge All use case
//!
//! Scores every roster participant through tolerant consensus, then commits
//! all verdicts at once. A single failure aborts the whole call before
//! anything is written.

use crate::equivalence::{EquivalenceStrategy, TolerantJudge};
use crate::ports::audit_log::{AuditEvent, AuditLog};
use crate::ports::consensus::{ConsensusRuntime, NondetOperation, OperationError};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{JudgingProgress, NoProgress};
use arena_domain::prompt::SCORING_CRITERIA;
use arena_domain::{
    ArenaError, ArenaState, ParticipantId, PromptTemplate, ScoreCard, ScoringRequest, Verdict,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Ask the scoring oracle for one participant's score card.
///
/// The raw answer is passed through untouched; validators judge it as-is
/// and it is parsed strictly only after it has been accepted.
pub struct ScoreArgumentOperation {
    gateway: Arc<dyn LlmGateway>,
    request: ScoringRequest,
}

impl ScoreArgumentOperation {
    pub fn new(gateway: Arc<dyn LlmGateway>, request: ScoringRequest) -> Self {
        Self { gateway, request }
    }
}

#[async_trait]
impl NondetOperation for ScoreArgumentOperation {
    fn label(&self) -> String {
        format!("score:{}", self.request.participant)
    }

    async fn run(&self, model: &str) -> Result<String, OperationError> {
        let session = self
            .gateway
            .create_session(model, PromptTemplate::scoring_system())
            .await?;
        Ok(session.send(&self.request.prompt()).await?)
    }
}

/// Use case for judging the open round
pub struct JudgeAllUseCase {
    gateway: Arc<dyn LlmGateway>,
    runtime: Arc<dyn ConsensusRuntime>,
    audit: Arc<dyn AuditLog>,
}

impl JudgeAllUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        runtime: Arc<dyn ConsensusRuntime>,
        audit: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            gateway,
            runtime,
            audit,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        state: &mut ArenaState,
        caller: &ParticipantId,
    ) -> Result<String, ArenaError> {
        self.execute_with_progress(state, caller, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        state: &mut ArenaState,
        caller: &ParticipantId,
        progress: &dyn JudgingProgress,
    ) -> Result<String, ArenaError> {
        let requests = state.scoring_requests(caller)?;
        info!(
            "Judging round {} with {} participants",
            state.round().period_id,
            requests.len()
        );
        progress.on_judging_start(requests.len());

        let mut verdicts = Vec::with_capacity(requests.len());
        for request in requests {
            let participant = request.participant.clone();
            match self.score(request).await {
                Ok(card) => {
                    debug!("{} scored {}", participant, card.period_score());
                    progress.on_participant_scored(&participant, card.period_score());
                    verdicts.push(Verdict::new(participant, card));
                }
                Err(e) => {
                    warn!("Scoring {} failed, aborting judging: {}", participant, e);
                    progress.on_participant_failed(&participant, &e.to_string());
                    progress.on_judging_complete(false);
                    return Err(e);
                }
            }
        }

        if let Err(e) = state.commit_verdicts(&verdicts) {
            progress.on_judging_complete(false);
            return Err(e);
        }

        for verdict in &verdicts {
            self.audit
                .log(AuditEvent::participant_scored(&verdict.participant, &verdict.card));
        }
        self.audit.log(AuditEvent::round_judged(
            &state.round().period_id,
            verdicts.len(),
        ));
        progress.on_judging_complete(true);
        info!("Round {} judged", state.round().period_id);

        Ok("Judging complete! Call get_leaderboard() to see results.".to_string())
    }

    async fn score(&self, request: ScoringRequest) -> Result<ScoreCard, ArenaError> {
        let strategy = TolerantJudge::new(request.task_description(), SCORING_CRITERIA);
        let op: Arc<dyn NondetOperation> =
            Arc::new(ScoreArgumentOperation::new(Arc::clone(&self.gateway), request));

        let accepted = strategy.resolve(self.runtime.as_ref(), op).await?;
        ScoreCard::parse(&accepted).map_err(|e| ArenaError::OracleUnavailable(e.to_string()))
    }
}
