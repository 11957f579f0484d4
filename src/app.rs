use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;

use crate::classify::{Classifier, Classify};
use crate::config::{APP_NAME, BenchConfig};
use crate::report::BenchmarkReport;
use crate::source::TaskSource;
use crate::worker::WorkerPool;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the benchmark.
    Run {
        /// Number of worker threads (defaults to the available CPU cores).
        #[arg(short, long)]
        workers: Option<usize>,

        /// Number of synthetic tasks to enqueue.
        #[arg(short, long)]
        tasks: Option<u64>,

        /// Assumed power draw per worker, in watts.
        #[arg(short, long)]
        power: Option<f64>,
    },
}

#[derive(Parser)]
#[command(
    name = "taskbench-rs",
    version,
    about = "Measure worker-pool throughput and estimated energy draw for a synthetic task load. Run without arguments for the default 1000-task benchmark."
)]
pub struct App {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl App {
    /// Parses the CLI and installs the global tracing subscriber.
    pub fn init() -> Result<Self> {
        let subscriber = tracing_subscriber::fmt().with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(Self::parse())
    }

    /// Runs the benchmark described by the CLI arguments and prints the
    /// report. Exits zero unless the run itself fails.
    pub fn execute(self) -> Result<()> {
        let config = self.config();

        println!("{}", style(format!("--- Running {APP_NAME} ---")).bold());
        println!("Workers: {}, Tasks: {}", config.workers, config.tasks);

        let report = run(config, Classifier::default())?;
        report.print();

        Ok(())
    }

    /// Assembles the run configuration, falling back to defaults for any
    /// argument not given.
    fn config(&self) -> BenchConfig {
        let defaults = BenchConfig::default();

        match self.command {
            Some(Commands::Run { workers, tasks, power }) => BenchConfig::new(
                workers.unwrap_or(defaults.workers),
                tasks.unwrap_or(defaults.tasks),
                power.unwrap_or(defaults.power_per_worker_watts),
            ),
            None => defaults,
        }
    }
}

/// Runs one full benchmark cycle with the given task function.
///
/// Spawns the pool, feeds it the synthetic task sequence, waits for every
/// worker to stop, then derives the metrics from the timed window.
///
/// # Errors
/// Fails on an invalid worker count, a spawn failure, a channel disconnect,
/// or a worker panic. All are fatal; there is no partial result.
pub fn run<C: Classify + 'static>(config: BenchConfig, classifier: C) -> Result<BenchmarkReport> {
    let pool = WorkerPool::new(classifier, config.workers)?;
    let outcome = pool.execute(TaskSource::new(config.tasks)).context("benchmark run failed")?;

    Ok(BenchmarkReport::compute(
        config.workers,
        config.tasks,
        outcome.results.len(),
        outcome.elapsed,
        config.power_per_worker_watts,
    ))
}
