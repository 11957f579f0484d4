//! Memory Allocator Configuration
//!
//! This module configures the application to use the mimalloc memory allocator.
//! mimalloc is a high-performance allocator that provides better performance
//! characteristics than the default system allocator for workloads with many
//! small allocations and deallocations, such as the per-task payloads and
//! results this benchmark churns through.

use mimalloc::MiMalloc;

/// Global memory allocator instance using mimalloc
///
/// This replaces the default system allocator with mimalloc so allocator
/// behavior stays consistent across platforms. A benchmark that measures
/// throughput should not have its numbers skewed by whichever libc
/// allocator the host happens to ship.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
