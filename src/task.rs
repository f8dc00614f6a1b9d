//! Delayed generation task
//!
//! The simulator UI inserts an artificial delay before results appear,
//! with a busy indicator in between. Here that is an explicit async task
//! with a cancellation handle: a second invocation can cancel the first
//! instead of both completions racing to clobber shared result state.

use crate::policy::PolicyInputs;
use crate::projection::{ProjectionEngine, ProjectionResult};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Artificial latency used by the simulator UI
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(2500);

/// Result of awaiting a generation task
#[derive(Debug, PartialEq)]
pub enum GenerationOutcome {
    /// The delay elapsed and the projection ran
    Completed(ProjectionResult),
    /// The task was cancelled (or dropped) before completing
    Cancelled,
}

/// Handle to an in-flight generation
pub struct GenerationTask {
    cancel: Option<oneshot::Sender<()>>,
    handle: JoinHandle<GenerationOutcome>,
}

impl GenerationTask {
    /// Spawn a generation that completes after `delay`
    ///
    /// The projection itself runs synchronously once the delay elapses;
    /// the delay exists only so callers can show progress.
    pub fn spawn(engine: ProjectionEngine, inputs: PolicyInputs, delay: Duration) -> Self {
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = sleep(delay) => GenerationOutcome::Completed(engine.project(&inputs)),
                _ = cancel_rx => GenerationOutcome::Cancelled,
            }
        });

        Self {
            cancel: Some(cancel_tx),
            handle,
        }
    }

    /// Cancel the generation if it has not completed yet
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }

    /// Wait for the task to finish
    pub async fn join(self) -> GenerationOutcome {
        // Destructure so the cancel sender stays alive while waiting;
        // dropping it early would fire the task's cancel branch.
        let GenerationTask { cancel, handle } = self;
        let outcome = handle.await.unwrap_or(GenerationOutcome::Cancelled);
        drop(cancel);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::projection::ProjectionConfig;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::new(Assumptions::default_pricing(), ProjectionConfig::default())
    }

    #[tokio::test]
    async fn test_completed_task_matches_sync_path() {
        let inputs = PolicyInputs::uniform(30.0);
        let expected = engine().project(&inputs);

        let task = GenerationTask::spawn(engine(), inputs, Duration::from_millis(0));

        match task.join().await {
            GenerationOutcome::Completed(result) => assert_eq!(result, expected),
            GenerationOutcome::Cancelled => panic!("task should have completed"),
        }
    }

    #[tokio::test]
    async fn test_cancel_before_completion() {
        let inputs = PolicyInputs::uniform(30.0);

        let mut task = GenerationTask::spawn(engine(), inputs, Duration::from_secs(30));
        task.cancel();

        assert_eq!(task.join().await, GenerationOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_cancel_after_completion_is_noop() {
        let inputs = PolicyInputs::default();

        let mut task = GenerationTask::spawn(engine(), inputs, Duration::from_millis(0));
        sleep(Duration::from_millis(20)).await;
        task.cancel();

        assert!(matches!(
            task.join().await,
            GenerationOutcome::Completed(_)
        ));
    }
}
