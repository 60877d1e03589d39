//! Equivalence strategies
//!
//! Callers pick how validators must agree on a wrapped operation's output and
//! depend only on [`EquivalenceStrategy`]:
//!
//! - [`ExactMatch`]: every execution must produce byte-identical output
//! - [`TolerantJudge`]: one proposal, judged by the other validators against
//!   written criteria

use crate::ports::consensus::{ConsensusError, ConsensusRuntime, NondetOperation};
use arena_domain::EquivalenceMode;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait EquivalenceStrategy: Send + Sync {
    fn mode(&self) -> EquivalenceMode;

    /// Resolve `op` to a single agreed output.
    async fn resolve(
        &self,
        runtime: &dyn ConsensusRuntime,
        op: Arc<dyn NondetOperation>,
    ) -> Result<String, ConsensusError>;
}

/// Byte-identical agreement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

#[async_trait]
impl EquivalenceStrategy for ExactMatch {
    fn mode(&self) -> EquivalenceMode {
        EquivalenceMode::ExactMatch
    }

    async fn resolve(
        &self,
        runtime: &dyn ConsensusRuntime,
        op: Arc<dyn NondetOperation>,
    ) -> Result<String, ConsensusError> {
        runtime.run_exact(op).await
    }
}

/// Agreement that a single proposal is reasonable.
#[derive(Debug, Clone)]
pub struct TolerantJudge {
    task: String,
    criteria: String,
}

impl TolerantJudge {
    pub fn new(task: impl Into<String>, criteria: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            criteria: criteria.into(),
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn criteria(&self) -> &str {
        &self.criteria
    }
}

#[async_trait]
impl EquivalenceStrategy for TolerantJudge {
    fn mode(&self) -> EquivalenceMode {
        EquivalenceMode::Tolerant
    }

    async fn resolve(
        &self,
        runtime: &dyn ConsensusRuntime,
        op: Arc<dyn NondetOperation>,
    ) -> Result<String, ConsensusError> {
        runtime.run_tolerant(op, &self.task, &self.criteria).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::consensus::OperationError;
    use std::sync::Mutex;

    struct Echo;

    #[async_trait]
    impl NondetOperation for Echo {
        fn label(&self) -> String {
            "echo".to_string()
        }

        async fn run(&self, model: &str) -> Result<String, OperationError> {
            Ok(format!("from {model}"))
        }
    }

    /// Records which runtime entry point was used.
    #[derive(Default)]
    struct RecordingRuntime {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ConsensusRuntime for RecordingRuntime {
        async fn run_exact(&self, op: Arc<dyn NondetOperation>) -> Result<String, ConsensusError> {
            self.calls.lock().unwrap().push("exact".to_string());
            Ok(op.run("m1").await?)
        }

        async fn run_tolerant(
            &self,
            op: Arc<dyn NondetOperation>,
            task: &str,
            criteria: &str,
        ) -> Result<String, ConsensusError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("tolerant:{task}:{criteria}"));
            Ok(op.run("m2").await?)
        }
    }

    #[tokio::test]
    async fn test_exact_match_uses_run_exact() {
        let runtime = RecordingRuntime::default();
        let out = ExactMatch.resolve(&runtime, Arc::new(Echo)).await.unwrap();
        assert_eq!(out, "from m1");
        assert_eq!(*runtime.calls.lock().unwrap(), vec!["exact"]);
        assert_eq!(ExactMatch.mode(), EquivalenceMode::ExactMatch);
    }

    #[tokio::test]
    async fn test_tolerant_passes_task_and_criteria() {
        let runtime = RecordingRuntime::default();
        let strategy = TolerantJudge::new("score it", "be fair");
        let out = strategy.resolve(&runtime, Arc::new(Echo)).await.unwrap();
        assert_eq!(out, "from m2");
        assert_eq!(
            *runtime.calls.lock().unwrap(),
            vec!["tolerant:score it:be fair"]
        );
    }

    #[tokio::test]
    async fn test_strategies_behind_one_interface() {
        let runtime = RecordingRuntime::default();
        let strategies: Vec<Box<dyn EquivalenceStrategy>> =
            vec![Box::new(ExactMatch), Box::new(TolerantJudge::new("t", "c"))];
        for strategy in &strategies {
            strategy.resolve(&runtime, Arc::new(Echo)).await.unwrap();
        }
        assert_eq!(runtime.calls.lock().unwrap().len(), 2);
    }
}
