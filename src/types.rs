//! Common type definitions for TaskBench.
//!
//! Provides the core structures passed through the benchmark's channels.
//!
//! # Overview
//!
//! - [`Task`]: An opaque unit of work produced by the task source
//! - [`WorkItem`]: What actually travels on the task channel - a task or a
//!   shutdown signal
//! - [`Label`]: The simulated classification categories
//! - [`Classification`]: The result of processing one task

use std::fmt::{Display, Formatter, Result as FmtResult};

use anyhow::{Result, bail};

/// An opaque unit of work.
///
/// The harness never inspects the payload beyond handing it to the
/// task-processing function; tasks are distinguishable only by it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    /// The payload identifying this task (e.g. `image_data_42`).
    pub payload: String,
}

impl Task {
    /// Creates a task wrapping the given payload.
    #[inline]
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self { payload: payload.into() }
    }
}

/// A message on the task channel.
///
/// Shutdown is a distinct variant rather than a magic payload value, so no
/// real task can ever collide with the sentinel. Exactly one `Shutdown` is
/// enqueued per worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkItem {
    /// A task to process.
    Job(Task),

    /// Tells exactly one worker to terminate.
    Shutdown,
}

/// Simulated classification categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Cat,
    Dog,
    Car,
}

impl Label {
    /// Array containing all labels, for random selection.
    pub const ALL: &'static [Self] = &[Self::Cat, Self::Dog, Self::Car];

    /// Returns the lowercase name of the label.
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog => "dog",
            Self::Car => "car",
        }
    }
}

impl Display for Label {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Result of processing one [`Task`].
///
/// Produced by a worker, carried on the result channel until the
/// orchestrator drains it after the pool has joined. Results carry no
/// ordering guarantee across workers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    /// The predicted label.
    pub label: Label,

    /// Prediction confidence in `[0, 1)`.
    pub confidence: f64,
}

impl Classification {
    /// Creates a classification, validating the confidence range.
    ///
    /// # Errors
    /// Returns an error if `confidence` is outside `[0, 1)` or not finite.
    pub fn new(label: Label, confidence: f64) -> Result<Self> {
        if !confidence.is_finite() || !(0.0..1.0).contains(&confidence) {
            bail!("confidence {confidence} outside [0, 1)");
        }

        Ok(Self { label, confidence })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_accepts_valid_confidence() {
        let result = Classification::new(Label::Cat, 0.0).unwrap();
        assert_eq!(result.label, Label::Cat);

        assert!(Classification::new(Label::Dog, 0.999).is_ok());
    }

    #[test]
    fn test_classification_rejects_out_of_range_confidence() {
        assert!(Classification::new(Label::Cat, 1.0).is_err());
        assert!(Classification::new(Label::Cat, -0.1).is_err());
        assert!(Classification::new(Label::Cat, f64::NAN).is_err());
        assert!(Classification::new(Label::Cat, f64::INFINITY).is_err());
    }

    #[test]
    fn test_shutdown_is_disjoint_from_any_task() {
        let item = WorkItem::Job(Task::new("image_data_0"));
        assert_ne!(item, WorkItem::Shutdown);
    }

    #[test]
    fn test_label_names() {
        for label in Label::ALL {
            assert!(!label.name().is_empty());
        }
        assert_eq!(Label::Car.to_string(), "car");
    }
}
