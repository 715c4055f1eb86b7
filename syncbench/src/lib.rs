#![warn(missing_docs)]
//! # SyncBench
//!
//! Micro-benchmark harness comparing three strategies for one fixed parallel
//! reduction (sum of evens + maximum even, finished as `2 * max - sum`):
//! - **Sequential**: single-threaded scan, the correctness oracle
//! - **Lock-Based**: one worker per partition, mutex-guarded accumulator
//! - **Lock-Free**: atomic fetch-add sum and a CAS retry loop for the max
//!
//! Both parallel strategies must reproduce the sequential result
//! bit-for-bit on any dataset and any worker count; the harness verifies
//! this on every run and times each strategy around the full spawn-to-join
//! window.
//!
//! ## Quick Start
//!
//! ```
//! use syncbench::{run_parallel, run_sequential, Strategy};
//!
//! let data = vec![2, 4, 6, 7];
//! let oracle = run_sequential(&data);
//! let parallel = run_parallel(&data, 4, Strategy::LockFree).unwrap();
//! assert_eq!(parallel, oracle);
//! assert_eq!(oracle.result, 2 * 6 - 12);
//! ```

// Re-export core types
pub use syncbench_core::{
    Accumulator, AtomicEvenMax, ExecutorError, NO_EVEN_SENTINEL, Reduction, Strategy, is_even,
    partition, run_lock_free, run_locked, run_parallel, run_sequential,
};

// Re-export stats
pub use syncbench_stats::{TimingSummary, compute_summary};

/// Run the SyncBench CLI harness.
///
/// Call this from the benchmark binary's `main()`.
pub use syncbench_cli::run;
