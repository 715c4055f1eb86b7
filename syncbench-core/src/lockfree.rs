//! Lock-Free Parallel Executor
//!
//! Same topology as the lock-based executor, but the accumulator fields are
//! independently atomic: the sum is a relaxed fetch-add and the max is a
//! compare-exchange retry loop. No cross-field ordering is needed because
//! the fields are combined only after the join barrier.

use crate::ExecutorError;
use crate::locked::join_workers;
use crate::partition::partition;
use crate::reduce::{NO_EVEN_SENTINEL, Reduction, derive_result, is_even};
use std::sync::atomic::{AtomicI32, AtomicI64, Ordering};
use std::thread;

/// Atomic running maximum over even contributions.
///
/// Starts at [`NO_EVEN_SENTINEL`]. The update loop is the standard lock-free
/// maximum: read, bail if the candidate doesn't beat the freshest observed
/// value, otherwise CAS and retry on failure. Once a real value is stored,
/// every successful write strictly increases the field, so no stale max can
/// survive the race. The sentinel state is the one non-monotonic transition
/// and it cannot be re-entered: `-1` is odd and never a contribution.
#[derive(Debug)]
pub struct AtomicEvenMax(AtomicI32);

impl AtomicEvenMax {
    /// New maximum in the "no even value seen" state.
    pub fn new() -> Self {
        Self(AtomicI32::new(NO_EVEN_SENTINEL))
    }

    /// Offer a candidate value.
    ///
    /// Applying a candidate that doesn't beat the current maximum is a
    /// no-op, so the operation is idempotent. `compare_exchange_weak` may
    /// fail spuriously; the loop re-checks against the observed value and
    /// retries rather than treating that as "no update needed".
    pub fn update(&self, x: i32) {
        let mut current = self.0.load(Ordering::Relaxed);
        loop {
            if current != NO_EVEN_SENTINEL && x <= current {
                return;
            }
            match self
                .0
                .compare_exchange_weak(current, x, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return,
                Err(observed) => current = observed,
            }
        }
    }

    /// Current maximum, or the sentinel.
    pub fn load(&self) -> i32 {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for AtomicEvenMax {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce `data` with `workers` threads updating atomic accumulator fields.
///
/// Relaxed ordering throughout: the join barrier at the end of the scope is
/// the happens-before edge that makes the final loads see every
/// contribution.
pub fn run_lock_free(data: &[i32], workers: usize) -> Result<Reduction, ExecutorError> {
    let ranges = partition(data.len(), workers)?;
    let sum = AtomicI64::new(0);
    let max = AtomicEvenMax::new();

    thread::scope(|scope| {
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| {
                let (sum, max) = (&sum, &max);
                scope.spawn(move || {
                    for &x in &data[range] {
                        if is_even(x) {
                            sum.fetch_add(x as i64, Ordering::Relaxed);
                            max.update(x);
                        }
                    }
                })
            })
            .collect();

        join_workers(handles)
    })?;

    let sum = sum.into_inner();
    let max = max.load();
    Ok(Reduction {
        sum,
        max,
        result: derive_result(sum, max),
    })
}
