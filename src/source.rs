//! Synthetic task generation.
//!
//! The task source produces a lazy, finite sequence of opaque payloads.
//! Generation order is irrelevant to correctness; workers may consume tasks
//! in any order.

use crate::types::Task;

/// A lazy, finite, restartable-per-run sequence of synthetic tasks.
///
/// Each task carries a positional payload of the form `image_data_<i>`.
#[derive(Clone, Copy, Debug)]
pub struct TaskSource {
    count: u64,
    next: u64,
}

impl TaskSource {
    /// Creates a source yielding exactly `count` tasks.
    #[inline]
    #[must_use]
    pub fn new(count: u64) -> Self {
        Self { count, next: 0 }
    }

    /// Total number of tasks this source yields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Returns true if the source yields no tasks.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Iterator for TaskSource {
    type Item = Task;

    fn next(&mut self) -> Option<Task> {
        if self.next >= self.count {
            return None;
        }

        let task = Task::new(format!("image_data_{}", self.next));
        self.next += 1;

        Some(task)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}
