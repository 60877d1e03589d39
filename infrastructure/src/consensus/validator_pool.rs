//! In-process consensus runtime backed by a pool of validator models.
//!
//! Exact mode runs the operation once per validator, concurrently, and
//! compares the raw outputs byte-for-byte. Tolerant mode lets the first
//! validator (the leader) produce a proposal; every other validator is asked
//! whether it meets the criteria and answers ACCEPT or REJECT. The leader's
//! own execution counts as an accepting vote.

use arena_application::ports::audit_log::{AuditEvent, AuditLog};
use arena_application::ports::consensus::{ConsensusError, ConsensusRuntime, NondetOperation};
use arena_application::ports::llm_gateway::{GatewayError, LlmGateway};
use arena_domain::{
    ConsensusOutcome, ConsensusRecord, EquivalenceMode, PromptTemplate, QuorumRule, Tally,
    ValidatorVote, parse_verdict,
};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

pub struct ValidatorPoolRuntime {
    gateway: Arc<dyn LlmGateway>,
    validators: Vec<String>,
    rule: QuorumRule,
    audit: Arc<dyn AuditLog>,
}

impl ValidatorPoolRuntime {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        validators: Vec<String>,
        rule: QuorumRule,
        audit: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            gateway,
            validators,
            rule,
            audit,
        }
    }

    pub fn validators(&self) -> &[String] {
        &self.validators
    }

    fn finish(&self, record: ConsensusRecord, outcome: ConsensusOutcome) {
        self.audit.log(AuditEvent::consensus(&record.finish(outcome)));
    }

    /// Ask one validator whether `proposal` satisfies the criteria.
    async fn judge(
        gateway: &dyn LlmGateway,
        model: &str,
        prompt: &str,
    ) -> Result<String, GatewayError> {
        let session = gateway
            .create_session(model, PromptTemplate::validator_system())
            .await?;
        session.send(prompt).await
    }
}

#[async_trait]
impl ConsensusRuntime for ValidatorPoolRuntime {
    async fn run_exact(&self, op: Arc<dyn NondetOperation>) -> Result<String, ConsensusError> {
        if self.validators.is_empty() {
            return Err(ConsensusError::NoValidators);
        }
        let label = op.label();
        let record =
            ConsensusRecord::new(&label, EquivalenceMode::ExactMatch, self.validators.len());
        info!(
            "Exact consensus for {} across {} validators",
            label,
            self.validators.len()
        );

        let mut join_set = JoinSet::new();
        for (index, model) in self.validators.iter().enumerate() {
            let op = Arc::clone(&op);
            let model = model.clone();
            join_set.spawn(async move {
                let result = op.run(&model).await;
                (index, model, result)
            });
        }

        let mut outputs: Vec<Option<String>> = vec![None; self.validators.len()];
        while let Some(joined) = join_set.join_next().await {
            let (index, model, result) = match joined {
                Ok(done) => done,
                Err(e) => {
                    join_set.abort_all();
                    let message = format!("{}: validator task failed: {}", label, e);
                    self.finish(record.with_detail(&message), ConsensusOutcome::Failed);
                    return Err(ConsensusError::OracleUnavailable(message));
                }
            };
            match result {
                Ok(output) => {
                    debug!("Validator {} produced {} bytes", model, output.len());
                    outputs[index] = Some(output);
                }
                Err(e) => {
                    join_set.abort_all();
                    warn!("Validator {} failed on {}: {}", model, label, e);
                    let message = format!("{} ({}): {}", label, model, e);
                    self.finish(record.with_detail(&message), ConsensusOutcome::Failed);
                    return Err(ConsensusError::OracleUnavailable(message));
                }
            }
        }

        let outputs: Vec<String> = outputs.into_iter().flatten().collect();
        let distinct: BTreeSet<&str> = outputs.iter().map(String::as_str).collect();
        if distinct.len() != 1 {
            let message = format!(
                "{}: {} distinct outputs from {} validators",
                label,
                distinct.len(),
                outputs.len()
            );
            warn!("{}", message);
            self.finish(record.with_detail(&message), ConsensusOutcome::Diverged);
            return Err(ConsensusError::Divergence(message));
        }

        self.finish(record, ConsensusOutcome::Agreed);
        outputs
            .into_iter()
            .next()
            .ok_or(ConsensusError::NoValidators)
    }

    async fn run_tolerant(
        &self,
        op: Arc<dyn NondetOperation>,
        task: &str,
        criteria: &str,
    ) -> Result<String, ConsensusError> {
        let Some((leader, others)) = self.validators.split_first() else {
            return Err(ConsensusError::NoValidators);
        };
        let label = op.label();
        let record = ConsensusRecord::new(&label, EquivalenceMode::Tolerant, self.validators.len());

        let proposal = match op.run(leader).await {
            Ok(p) => p,
            Err(e) => {
                warn!("Leader {} failed on {}: {}", leader, label, e);
                let message = format!("{} ({}): {}", label, leader, e);
                self.finish(record.with_detail(&message), ConsensusOutcome::Failed);
                return Err(ConsensusError::OracleUnavailable(message));
            }
        };
        debug!("Leader {} proposed for {}", leader, label);

        let prompt = PromptTemplate::validator_prompt(task, criteria, &proposal);
        let mut join_set = JoinSet::new();
        for (index, model) in others.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let model = model.clone();
            let prompt = prompt.clone();
            join_set.spawn(async move {
                let result = Self::judge(gateway.as_ref(), &model, &prompt).await;
                (index, model, result)
            });
        }

        let mut votes: Vec<Option<ValidatorVote>> = vec![None; others.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, model, Ok(answer))) => {
                    let (accepted, reasoning) = parse_verdict(&answer);
                    info!(
                        "Validator {} voted: {}",
                        model,
                        if accepted { "ACCEPT" } else { "REJECT" }
                    );
                    votes[index] = Some(ValidatorVote {
                        validator: model,
                        accepted,
                        reasoning,
                    });
                }
                Ok((index, model, Err(e))) => {
                    warn!("Validator {} failed to judge {}: {}", model, label, e);
                    votes[index] = Some(ValidatorVote::reject(model, format!("error: {}", e)));
                }
                Err(e) => {
                    warn!("Validator task for {} failed: {}", label, e);
                }
            }
        }

        // A validator that never answered still votes, as a rejection.
        let mut all_votes = vec![ValidatorVote::accept(leader.clone(), "leader")];
        all_votes.extend(votes.into_iter().zip(others).map(|(vote, model)| {
            vote.unwrap_or_else(|| {
                ValidatorVote::reject(model.clone(), "error: validator task failed")
            })
        }));
        let tally = Tally::from_votes(all_votes, self.rule);
        info!("{}: {}", label, tally);

        if tally.passed {
            self.finish(record.with_tally(tally), ConsensusOutcome::Agreed);
            Ok(proposal)
        } else {
            let message = format!("{}: {}\n{}", label, tally, tally.rejection_feedback());
            self.finish(
                record.with_tally(tally).with_detail(&message),
                ConsensusOutcome::Rejected,
            );
            Err(ConsensusError::Rejected(message))
        }
    }
}
