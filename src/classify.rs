//! The simulated task-processing function.
//!
//! The harness treats the per-task work as an opaque collaborator behind the
//! [`Classify`] trait: always terminates, never fails, takes bounded but
//! variable time. The default [`Classifier`] simulates an image
//! classification step by sleeping for a uniformly random interval and
//! emitting a random label with a random confidence.
//!
//! Each worker draws from its own thread-local random generator; there is no
//! shared random state to synchronize.

use std::ops::Range;
use std::thread;
use std::time::Duration;

use rand::RngExt;

use crate::config::{TASK_LATENCY_MAX_MS, TASK_LATENCY_MIN_MS};
use crate::types::{Classification, Label, Task};

/// The external task-processing function invoked by each worker.
///
/// Contract: synchronous, always terminates, always succeeds. Implementations
/// must be shareable across worker threads.
pub trait Classify: Send + Sync {
    /// Processes one task, producing a classification.
    fn classify(&self, task: &Task) -> Classification;
}

/// Simulated image classification.
///
/// Sleeps for a uniformly random duration within the configured latency
/// window, then returns a uniformly random label and confidence.
#[derive(Clone, Debug)]
pub struct Classifier {
    /// Simulated processing time window, in milliseconds.
    latency_ms: Range<u64>,
}

impl Classifier {
    /// Creates a classifier with an explicit latency window.
    ///
    /// An empty window (e.g. `0..0`) disables the sleep entirely, which is
    /// useful for structural tests that should not depend on real time.
    #[inline]
    #[must_use]
    pub fn new(latency_ms: Range<u64>) -> Self {
        Self { latency_ms }
    }
}

impl Default for Classifier {
    /// Uses the reference simulation window of 50-150 ms per task.
    fn default() -> Self {
        Self::new(TASK_LATENCY_MIN_MS..TASK_LATENCY_MAX_MS)
    }
}

impl Classify for Classifier {
    fn classify(&self, _task: &Task) -> Classification {
        let mut rng = rand::rng();

        if !self.latency_ms.is_empty() {
            let delay = rng.random_range(self.latency_ms.clone());
            thread::sleep(Duration::from_millis(delay));
        }

        let label = Label::ALL[rng.random_range(0..Label::ALL.len())];
        // random::<f64>() is uniform over [0, 1), which is exactly the
        // confidence contract.
        let confidence = rng.random::<f64>();

        Classification { label, confidence }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn test_confidence_within_unit_interval() {
        let classifier = Classifier::new(0..0);
        let task = Task::new("image_data_0");

        for _ in 0..100 {
            let result = classifier.classify(&task);
            assert!((0.0..1.0).contains(&result.confidence));
        }
    }

    #[test]
    fn test_label_is_known_category() {
        let classifier = Classifier::new(0..0);
        let task = Task::new("image_data_0");

        let result = classifier.classify(&task);
        assert!(Label::ALL.contains(&result.label));
    }

    #[test]
    fn test_empty_latency_window_skips_sleep() {
        let classifier = Classifier::new(0..0);
        let task = Task::new("image_data_0");

        let started = Instant::now();
        classifier.classify(&task);

        // Generous bound; the point is that no 50ms+ sleep happened.
        assert!(started.elapsed().as_millis() < 40);
    }
}
