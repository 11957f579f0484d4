//! Benchmark metrics and console reporting.
//!
//! The report is derived data computed once after every worker has joined:
//! elapsed wall-clock time, throughput, and the linear estimated-energy
//! figure. Nothing here is mutated after construction.

use std::time::Duration;

use console::style;

use crate::config::SECONDS_PER_HOUR;

/// Completed tasks per second of wall-clock time.
///
/// Guards the zero-elapsed case (possible when no tasks were enqueued) by
/// reporting 0.0 instead of dividing by zero.
#[must_use]
pub fn throughput(tasks: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();

    if secs <= 0.0 {
        return 0.0;
    }

    tasks as f64 / secs
}

/// Linear energy estimate in watt-hours.
///
/// Assumes each worker draws `power_per_worker_watts` for the full elapsed
/// duration, idle or busy. A placeholder model, not a physical measurement.
#[must_use]
pub fn estimated_energy_wh(power_per_worker_watts: f64, workers: usize, elapsed: Duration) -> f64 {
    (power_per_worker_watts * workers as f64 * elapsed.as_secs_f64()) / SECONDS_PER_HOUR
}

/// Final figures for one benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct BenchmarkReport {
    /// Number of workers in the pool.
    pub workers: usize,

    /// Number of tasks enqueued.
    pub tasks: u64,

    /// Number of results drained from the result channel.
    pub results_collected: usize,

    /// Wall-clock time from first enqueue to last join.
    pub elapsed: Duration,

    /// Tasks per second, 0.0 when elapsed is zero.
    pub throughput: f64,

    /// Estimated energy draw of the pool, in watt-hours.
    pub energy_wh: f64,
}

impl BenchmarkReport {
    /// Derives the report from a finished run.
    #[must_use]
    pub fn compute(
        workers: usize,
        tasks: u64,
        results_collected: usize,
        elapsed: Duration,
        power_per_worker_watts: f64,
    ) -> Self {
        Self {
            workers,
            tasks,
            results_collected,
            elapsed,
            throughput: throughput(tasks, elapsed),
            energy_wh: estimated_energy_wh(power_per_worker_watts, workers, elapsed),
        }
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        println!();
        println!("{}", style("--- Benchmark Results ---").bold());
        println!("  {:<18} {}", style("Workers").bold(), self.workers);
        println!("  {:<18} {}", style("Tasks").bold(), self.tasks);
        println!("  {:<18} {}", style("Results").bold(), self.results_collected);
        println!("  {:<18} {:.2} seconds", style("Total Time").bold(), self.elapsed.as_secs_f64());
        println!("  {:<18} {:.2} tasks/sec", style("Throughput").bold(), self.throughput);
        println!("  {:<18} {:.4} Wh", style("Simulated Energy").bold(), self.energy_wh);
        println!("  {}", "-".repeat(25));
    }
}
