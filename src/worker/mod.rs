use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow, bail};

use crate::classify::Classify;
use crate::types::{Classification, Task, WorkItem};
use crate::worker::executor::Executor;

pub mod executor;

/// What one benchmark run produced.
///
/// Elapsed time covers task enqueuing through worker join; results are
/// drained from the result channel after the pool has fully stopped, in no
/// particular cross-worker order.
pub struct RunOutcome {
    /// Wall-clock time from the first enqueue to the last worker join.
    pub elapsed: Duration,

    /// Every classification the workers produced.
    pub results: Vec<Classification>,
}

/// Fixed-size pool of worker threads fed from a shared task channel.
///
/// Coordination is message passing only: a bounded task channel from the
/// orchestrator to the workers, and a result channel back. Each worker
/// receives exactly one shutdown signal; the pool joins every thread before
/// reporting, so no worker outlives a run.
pub struct WorkerPool<C> {
    /// Shared task-processing function (Arc so all workers borrow one).
    classifier: Arc<C>,

    /// Number of worker threads.
    size: usize,
}

impl<C: Classify + 'static> WorkerPool<C> {
    /// Creates a pool of `size` workers around the given task function.
    ///
    /// # Errors
    /// Fails if `size` is zero.
    pub fn new(classifier: C, size: usize) -> Result<Self> {
        if size == 0 {
            bail!("worker count must be at least 1");
        }

        Ok(Self { classifier: Arc::new(classifier), size })
    }

    /// Number of workers in the pool.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Runs the full benchmark cycle over the given tasks.
    ///
    /// Spawns the workers, then: enqueue every task, enqueue exactly one
    /// shutdown signal per worker, join all workers, drain the results.
    /// The timed window spans enqueuing through join.
    ///
    /// # Errors
    /// Fails if a worker thread cannot be spawned (before any task is
    /// enqueued), if a channel disconnects mid-run, or if a worker panics.
    /// Any of these is fatal to the whole run; there is no retry.
    pub fn execute(&self, tasks: impl Iterator<Item = Task>) -> Result<RunOutcome> {
        let channel_size = self.size * 2;
        let (task_tx, task_rx) = flume::bounded::<WorkItem>(channel_size);

        // Results are only drained after join, so this channel must be
        // unbounded: a bounded one would fill up and block workers ahead of
        // their shutdown signal.
        let (result_tx, result_rx) = flume::unbounded::<Classification>();

        let mut handles = Vec::with_capacity(self.size);

        for i in 0..self.size {
            let executor = Executor::new(Arc::clone(&self.classifier));
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();

            let spawned = thread::Builder::new()
                .name(format!("worker-{i}"))
                .spawn(move || executor.run(&task_rx, &result_tx));

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    // Unblock the workers that did start; nothing has been
                    // enqueued yet, so shutting them down loses no work.
                    for _ in 0..handles.len() {
                        let _ = task_tx.send(WorkItem::Shutdown);
                    }
                    for handle in handles {
                        let _ = handle.join();
                    }

                    return Err(e).context("failed to spawn worker thread");
                }
            }
        }

        // The pool keeps no receiving end of the task channel and no sending
        // end of the result channel.
        drop(task_rx);
        drop(result_tx);

        tracing::debug!(workers = self.size, "worker pool started");

        let started = Instant::now();

        let mut enqueued: u64 = 0;
        for task in tasks {
            task_tx.send(WorkItem::Job(task)).context("task channel closed while enqueuing")?;
            enqueued += 1;
        }

        // Exactly one shutdown signal per worker. Fewer would leave a worker
        // blocked forever; the channel type keeps signals disjoint from tasks.
        for _ in 0..self.size {
            task_tx
                .send(WorkItem::Shutdown)
                .context("task channel closed while signaling shutdown")?;
        }
        drop(task_tx);

        let mut processed: u64 = 0;
        let mut failure: Option<anyhow::Error> = None;

        for handle in handles {
            match handle.join() {
                Ok(Ok(count)) => processed += count,
                Ok(Err(e)) => {
                    failure.get_or_insert(e);
                }
                Err(_) => {
                    failure.get_or_insert_with(|| anyhow!("worker thread panicked"));
                }
            }
        }

        let elapsed = started.elapsed();

        if let Some(e) = failure {
            return Err(e);
        }

        let results: Vec<Classification> = result_rx.drain().collect();

        tracing::debug!(
            enqueued,
            processed,
            collected = results.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "worker pool drained"
        );

        Ok(RunOutcome { elapsed, results })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::source::TaskSource;
    use crate::types::Label;

    /// Instant task function that records every payload it sees.
    struct RecordingClassifier {
        seen: Mutex<Vec<String>>,
    }

    impl RecordingClassifier {
        fn new() -> Self {
            Self { seen: Mutex::new(Vec::new()) }
        }
    }

    impl Classify for RecordingClassifier {
        fn classify(&self, task: &Task) -> Classification {
            self.seen.lock().unwrap().push(task.payload.clone());
            Classification { label: Label::Cat, confidence: 0.5 }
        }
    }

    /// Panics on one specific payload, succeeds on the rest.
    struct PanickingClassifier {
        poison: &'static str,
    }

    impl Classify for PanickingClassifier {
        fn classify(&self, task: &Task) -> Classification {
            assert_ne!(task.payload, self.poison, "poisoned task");
            Classification { label: Label::Dog, confidence: 0.5 }
        }
    }

    #[test]
    fn test_zero_tasks_terminates_with_zero_results() {
        let pool = WorkerPool::new(RecordingClassifier::new(), 1).unwrap();

        let outcome = pool.execute(TaskSource::new(0)).unwrap();

        assert!(outcome.results.is_empty());
    }

    #[test]
    fn test_all_tasks_processed_exactly_once() {
        let pool = WorkerPool::new(RecordingClassifier::new(), 4).unwrap();

        let outcome = pool.execute(TaskSource::new(8)).unwrap();

        assert_eq!(outcome.results.len(), 8);

        let mut seen = pool.classifier.seen.lock().unwrap().clone();
        seen.sort();

        let mut expected: Vec<String> = (0..8).map(|i| format!("image_data_{i}")).collect();
        expected.sort();

        assert_eq!(seen, expected);
    }

    #[test]
    fn test_more_workers_than_tasks() {
        let pool = WorkerPool::new(RecordingClassifier::new(), 8).unwrap();

        let outcome = pool.execute(TaskSource::new(3)).unwrap();

        assert_eq!(outcome.results.len(), 3);
    }

    #[test]
    fn test_worker_count_must_be_positive() {
        assert!(WorkerPool::new(RecordingClassifier::new(), 0).is_err());
    }

    #[test]
    fn test_panicking_task_function_fails_the_run() {
        let pool = WorkerPool::new(PanickingClassifier { poison: "image_data_2" }, 2).unwrap();

        let result = pool.execute(TaskSource::new(4));

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_shutdown_signal_blocks_worker() {
        let (task_tx, task_rx) = flume::bounded::<WorkItem>(4);
        let (result_tx, result_rx) = flume::unbounded::<Classification>();

        let executor = Executor::new(Arc::new(RecordingClassifier::new()));
        let handle = thread::spawn(move || executor.run(&task_rx, &result_tx));

        task_tx.send(WorkItem::Job(Task::new("image_data_0"))).unwrap();

        // With no shutdown signal the worker must stay blocked on dequeue.
        thread::sleep(Duration::from_millis(100));
        assert!(!handle.is_finished());
        assert_eq!(result_rx.len(), 1);

        task_tx.send(WorkItem::Shutdown).unwrap();
        let processed = handle.join().unwrap().unwrap();

        assert_eq!(processed, 1);
    }
}
