//! The per-worker receive/process/send loop.
//!
//! One executor runs on one OS thread. It blocks on the task channel,
//! invokes the task-processing function for each job, and forwards the
//! result. It stops only when it dequeues its shutdown signal.
//!
//! # Thread Safety
//!
//! The task function is shared via Arc; the executor itself owns no other
//! state, so workers coordinate exclusively through the two channels.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use flume::{Receiver, Sender};

use crate::classify::Classify;
use crate::types::{Classification, WorkItem};

/// One worker's execution loop.
///
/// State machine: blocked on dequeue, processing, back to blocked; the
/// terminal state is reached only by dequeuing [`WorkItem::Shutdown`].
pub struct Executor<C> {
    /// Shared reference to the task-processing function.
    classifier: Arc<C>,
}

impl<C: Classify> Executor<C> {
    /// Creates an executor around a shared task function.
    #[inline]
    pub fn new(classifier: Arc<C>) -> Self {
        Self { classifier }
    }

    /// Pulls tasks until the shutdown signal arrives.
    ///
    /// Returns the number of tasks this worker processed.
    ///
    /// # Errors
    /// Fails if either channel disconnects before the shutdown signal is
    /// seen; the pool treats that as fatal to the whole run.
    pub fn run(&self, tasks: &Receiver<WorkItem>, results: &Sender<Classification>) -> Result<u64> {
        let mut processed: u64 = 0;

        loop {
            match tasks.recv() {
                Ok(WorkItem::Job(task)) => {
                    let result = self.classifier.classify(&task);
                    results.send(result).context("result channel closed")?;
                    processed += 1;
                }
                Ok(WorkItem::Shutdown) => break,
                Err(_) => bail!("task channel closed before shutdown signal"),
            }
        }

        Ok(processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Label, Task};

    struct StubClassifier;

    impl Classify for StubClassifier {
        fn classify(&self, _task: &Task) -> Classification {
            Classification { label: Label::Car, confidence: 0.25 }
        }
    }

    #[test]
    fn test_stops_at_shutdown_leaving_later_items() {
        let (task_tx, task_rx) = flume::unbounded();
        let (result_tx, result_rx) = flume::unbounded();

        task_tx.send(WorkItem::Job(Task::new("image_data_0"))).unwrap();
        task_tx.send(WorkItem::Shutdown).unwrap();
        task_tx.send(WorkItem::Job(Task::new("image_data_1"))).unwrap();

        let executor = Executor::new(Arc::new(StubClassifier));
        let processed = executor.run(&task_rx, &result_tx).unwrap();

        assert_eq!(processed, 1);
        assert_eq!(result_rx.len(), 1);
        // The item past the shutdown signal stays queued.
        assert_eq!(task_rx.len(), 1);
    }

    #[test]
    fn test_disconnect_before_shutdown_is_an_error() {
        let (task_tx, task_rx) = flume::unbounded();
        let (result_tx, _result_rx) = flume::unbounded();

        task_tx.send(WorkItem::Job(Task::new("image_data_0"))).unwrap();
        drop(task_tx);

        let executor = Executor::new(Arc::new(StubClassifier));
        let result = executor.run(&task_rx, &result_tx);

        assert!(result.is_err());
    }
}
