//! Open Round use case
//!
//! Checks the round gates, agrees on a topic through exact-match consensus
//! and resets the arena for the new period.

use crate::config::ArenaParams;
use crate::equivalence::{EquivalenceStrategy, ExactMatch};
use crate::ports::audit_log::{AuditEvent, AuditLog};
use crate::ports::consensus::{ConsensusRuntime, NondetOperation, OperationError};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::topic_source::TopicSource;
use arena_domain::util::truncate_chars;
use arena_domain::{ArenaError, ArenaState, CallContext, PromptTemplate, TopicProposal};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Fetch public text and ask the oracle for a debate topic.
///
/// Output is the canonical (sorted-key) JSON of a [`TopicProposal`], so that
/// independent executions which agree in substance agree byte-for-byte.
pub struct FetchTopicOperation {
    source: Arc<dyn TopicSource>,
    gateway: Arc<dyn LlmGateway>,
    max_chars: usize,
}

impl FetchTopicOperation {
    pub fn new(
        source: Arc<dyn TopicSource>,
        gateway: Arc<dyn LlmGateway>,
        max_chars: usize,
    ) -> Self {
        Self {
            source,
            gateway,
            max_chars,
        }
    }
}

#[async_trait]
impl NondetOperation for FetchTopicOperation {
    fn label(&self) -> String {
        "fetch_topic".to_string()
    }

    async fn run(&self, model: &str) -> Result<String, OperationError> {
        let page = self.source.fetch().await?;
        let excerpt = truncate_chars(&page, self.max_chars);
        debug!(
            "Topic excerpt from {}: {} chars",
            self.source.describe(),
            excerpt.chars().count()
        );

        let session = self
            .gateway
            .create_session(model, PromptTemplate::topic_system())
            .await?;
        let raw = session.send(&PromptTemplate::topic_prompt(excerpt)).await?;

        TopicProposal::canonicalize(&raw).map_err(|e| OperationError::Malformed(e.to_string()))
    }
}

/// Use case for opening a round
pub struct OpenRoundUseCase {
    source: Arc<dyn TopicSource>,
    gateway: Arc<dyn LlmGateway>,
    runtime: Arc<dyn ConsensusRuntime>,
    audit: Arc<dyn AuditLog>,
    params: ArenaParams,
}

impl OpenRoundUseCase {
    pub fn new(
        source: Arc<dyn TopicSource>,
        gateway: Arc<dyn LlmGateway>,
        runtime: Arc<dyn ConsensusRuntime>,
        audit: Arc<dyn AuditLog>,
        params: ArenaParams,
    ) -> Self {
        Self {
            source,
            gateway,
            runtime,
            audit,
            params,
        }
    }

    /// Open a round on `state`. On error `state` is unchanged.
    pub async fn execute(
        &self,
        state: &mut ArenaState,
        ctx: &CallContext,
    ) -> Result<String, ArenaError> {
        // Gates first: no oracle traffic for a call that would be refused
        let period = state.check_open(ctx)?;
        info!("Opening round {} (caller {})", period, ctx.caller);

        let op: Arc<dyn NondetOperation> = Arc::new(FetchTopicOperation::new(
            Arc::clone(&self.source),
            Arc::clone(&self.gateway),
            self.params.topic_max_chars,
        ));
        let canonical = ExactMatch.resolve(self.runtime.as_ref(), op).await?;
        let proposal = TopicProposal::from_canonical(&canonical)
            .map_err(|e| ArenaError::OracleUnavailable(e.to_string()))?;

        let period = state.open_round(ctx, proposal)?;
        let round = state.round();
        self.audit.log(AuditEvent::round_opened(
            &period,
            &round.topic,
            &round.position_a,
            &round.position_b,
        ));
        info!("Round {} opened: {}", period, round.topic);

        Ok(format!("Round {} opened! Topic: {}", period, round.topic))
    }
}
