#![warn(missing_docs)]
//! SyncBench Core - Parallel Reduction Executors
//!
//! This crate provides the reduction core of the benchmark:
//! - Reducer semantics shared by every strategy (even-sum + even-max)
//! - Index-range partitioner for a fixed worker count
//! - Sequential executor (the correctness oracle)
//! - Lock-based parallel executor (one mutex guarding both accumulator fields)
//! - Lock-free parallel executor (atomic fetch-add + CAS max loop)
//!
//! All three executors consume the same immutable dataset slice and must
//! produce bit-identical results for it; the surrounding harness exists to
//! time them against each other.

mod locked;
mod lockfree;
mod partition;
mod reduce;
mod sequential;

pub use locked::run_locked;
pub use lockfree::{AtomicEvenMax, run_lock_free};
pub use partition::partition;
pub use reduce::{Accumulator, NO_EVEN_SENTINEL, Reduction, is_even};
pub use sequential::run_sequential;

/// Errors from the parallel executors.
#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    /// The requested worker count cannot partition anything.
    #[error("invalid worker count: {0} (must be at least 1)")]
    InvalidWorkerCount(usize),

    /// A worker thread panicked; the whole run is discarded rather than
    /// reporting a result missing that partition's contribution.
    #[error("worker {index} panicked: {message}")]
    WorkerPanicked {
        /// Index of the partition whose worker died.
        index: usize,
        /// Panic payload, if it was a string.
        message: String,
    },
}

/// Synchronization strategy for the parallel executors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Shared accumulator behind a mutex; both fields updated as a unit.
    Locked,
    /// Independently-atomic fields; fetch-add sum and CAS-retry max.
    LockFree,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Locked => write!(f, "locked"),
            Strategy::LockFree => write!(f, "lock-free"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "locked" | "mutex" => Ok(Strategy::Locked),
            "lock-free" | "lockfree" | "atomic" => Ok(Strategy::LockFree),
            other => Err(format!("Unknown strategy: {}", other)),
        }
    }
}

/// Run the reduction over `data` with `workers` threads under the given
/// synchronization strategy.
///
/// Fails fast with [`ExecutorError::InvalidWorkerCount`] before spawning
/// anything if `workers == 0`. `workers` larger than `data.len()` is fine:
/// the surplus workers get empty partitions and contribute nothing.
pub fn run_parallel(
    data: &[i32],
    workers: usize,
    strategy: Strategy,
) -> Result<Reduction, ExecutorError> {
    match strategy {
        Strategy::Locked => run_locked(data, workers),
        Strategy::LockFree => run_lock_free(data, workers),
    }
}
