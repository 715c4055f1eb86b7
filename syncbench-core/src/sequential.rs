//! Sequential Executor
//!
//! Single-threaded left-to-right scan. This is the correctness oracle: both
//! parallel executors must reproduce its output bit-for-bit on the same
//! dataset.

use crate::reduce::{Accumulator, Reduction};

/// Reduce the whole dataset on the calling thread.
pub fn run_sequential(data: &[i32]) -> Reduction {
    let mut acc = Accumulator::new();
    for &x in data {
        acc.record(x);
    }
    acc.finish()
}
