//! TaskBench - Worker-pool throughput micro-benchmark.
//!
//! Measures how worker count and task count affect completion time for a
//! synthetic unit of work, using:
//! - A fixed-size pool of OS threads pulling tasks from a shared FIFO channel
//! - Tagged shutdown signals (one per worker) for bounded worker lifetime
//! - Wall-clock timing around the parallel run, reported as throughput and a
//!   linear estimated-energy figure

pub mod app;
pub mod classify;
pub mod config;
pub mod report;
pub mod source;
pub mod types;
pub mod worker;
