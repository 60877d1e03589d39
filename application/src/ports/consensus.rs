//! Consensus runtime port
//!
//! A non-deterministic operation (web fetch, model call) is wrapped in a
//! [`NondetOperation`] and handed to a [`ConsensusRuntime`], which returns a
//! single agreed output or a single failure.

use super::llm_gateway::GatewayError;
use super::topic_source::SourceError;
use arena_domain::ArenaError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Failure of one execution of a wrapped operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Topic source error: {0}")]
    Source(#[from] SourceError),

    #[error("Malformed oracle output: {0}")]
    Malformed(String),
}

/// A non-deterministic, string-producing operation.
///
/// The runtime may execute it once per validator; `model` names the model
/// the executing validator is backed by.
#[async_trait]
pub trait NondetOperation: Send + Sync {
    /// Short label used in logs and audit records (e.g. `fetch_topic`).
    fn label(&self) -> String;

    async fn run(&self, model: &str) -> Result<String, OperationError>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsensusError {
    #[error("Validators disagreed: {0}")]
    Divergence(String),

    #[error("Proposal rejected: {0}")]
    Rejected(String),

    #[error("Oracle unavailable: {0}")]
    OracleUnavailable(String),

    #[error("No validators configured")]
    NoValidators,
}

impl From<OperationError> for ConsensusError {
    fn from(err: OperationError) -> Self {
        ConsensusError::OracleUnavailable(err.to_string())
    }
}

impl From<ConsensusError> for ArenaError {
    fn from(err: ConsensusError) -> Self {
        match err {
            ConsensusError::Divergence(msg) => ArenaError::ConsensusDivergence(msg),
            ConsensusError::Rejected(msg) => ArenaError::ConsensusRejected(msg),
            ConsensusError::OracleUnavailable(msg) => ArenaError::OracleUnavailable(msg),
            ConsensusError::NoValidators => {
                ArenaError::OracleUnavailable("no validators configured".to_string())
            }
        }
    }
}

/// Runs wrapped operations redundantly and agrees on one output.
#[async_trait]
pub trait ConsensusRuntime: Send + Sync {
    /// Every validator executes `op`; succeeds only when all raw outputs are
    /// byte-identical.
    async fn run_exact(&self, op: Arc<dyn NondetOperation>) -> Result<String, ConsensusError>;

    /// One execution produces a proposal; the remaining validators judge it
    /// against `criteria`.
    async fn run_tolerant(
        &self,
        op: Arc<dyn NondetOperation>,
        task: &str,
        criteria: &str,
    ) -> Result<String, ConsensusError>;
}
