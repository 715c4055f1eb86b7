#![warn(missing_docs)]
//! SyncBench Timing Statistics
//!
//! Summarizes the wall-clock samples collected from repeated strategy runs:
//! - Mean, median, standard deviation
//! - Min/max and tail percentiles (p90, p95, p99)
//! - Coefficient of variation for run-to-run stability

mod summary;

pub use summary::{TimingSummary, compute_summary, percentile_of_sorted};
