//! Global Configuration Constants
//!
//! This module contains the configuration parameters used throughout the
//! TaskBench harness. The defaults mirror the reference benchmark setup:
//! one worker per available CPU core, 1000 tasks, and a constant 2.5 W
//! power draw per worker for the energy estimate.
//!
//! Runtime configuration is carried by [`BenchConfig`], constructed once at
//! process start and passed into the orchestrator. There is no process-wide
//! mutable state.

use std::thread;

/// Application name used in user-facing output.
pub const APP_NAME: &str = "TaskBench";

/// Default number of synthetic tasks per benchmark run.
pub const DEFAULT_NUM_TASKS: u64 = 1000;

/// Fallback worker count when the host's available parallelism cannot be
/// detected.
pub const DEFAULT_NUM_WORKERS: usize = 4;

/// Assumed constant power draw of one busy worker, in watts.
///
/// The energy figure is a linear estimate (watts x workers x elapsed), not a
/// physical measurement. The constant applies for the full elapsed duration
/// regardless of idle/busy state.
pub const POWER_PER_WORKER_WATTS: f64 = 2.5;

/// Lower bound of the simulated per-task processing time, in milliseconds.
pub const TASK_LATENCY_MIN_MS: u64 = 50;

/// Upper bound (exclusive) of the simulated per-task processing time, in
/// milliseconds.
pub const TASK_LATENCY_MAX_MS: u64 = 150;

/// Seconds per hour, for the watt-hours conversion.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Runtime configuration for one benchmark run.
///
/// Assembled from CLI arguments (falling back to the defaults above) and
/// handed to the orchestrator; never mutated afterwards.
#[derive(Clone, Copy, Debug)]
pub struct BenchConfig {
    /// Number of worker threads in the pool. Must be at least 1.
    pub workers: usize,

    /// Number of synthetic tasks to enqueue.
    pub tasks: u64,

    /// Assumed power draw per worker in watts, for the energy estimate.
    pub power_per_worker_watts: f64,
}

impl BenchConfig {
    /// Creates a config with explicit values.
    #[inline]
    #[must_use]
    pub fn new(workers: usize, tasks: u64, power_per_worker_watts: f64) -> Self {
        Self { workers, tasks, power_per_worker_watts }
    }

    /// Returns the host's available parallelism, falling back to
    /// [`DEFAULT_NUM_WORKERS`] if detection fails.
    #[inline]
    #[must_use]
    pub fn detect_workers() -> usize {
        thread::available_parallelism().map(|p| p.get()).unwrap_or(DEFAULT_NUM_WORKERS)
    }
}

impl Default for BenchConfig {
    /// Defaults to one worker per available CPU core, the fixed benchmark
    /// task count, and the reference power constant.
    fn default() -> Self {
        Self {
            workers: Self::detect_workers(),
            tasks: DEFAULT_NUM_TASKS,
            power_per_worker_watts: POWER_PER_WORKER_WATTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();

        assert!(config.workers >= 1);
        assert_eq!(config.tasks, DEFAULT_NUM_TASKS);
        assert!((config.power_per_worker_watts - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_latency_bounds_ordered() {
        assert!(TASK_LATENCY_MIN_MS < TASK_LATENCY_MAX_MS);
    }
}
