//! Lock-Based Parallel Executor
//!
//! One scoped worker thread per partition; every even value's contribution
//! is applied under a single mutex guarding both accumulator fields, so sum
//! and max always move as a unit. The lock is held for O(1) work per even
//! value and released on every path by the guard's scope.

use crate::ExecutorError;
use crate::partition::partition;
use crate::reduce::{Accumulator, Reduction, is_even};
use std::sync::{Mutex, PoisonError};
use std::thread;

/// Reduce `data` with `workers` threads serializing updates through a mutex.
///
/// The accumulator is read only after every worker has been joined. A
/// panicking worker fails the whole run ([`ExecutorError::WorkerPanicked`])
/// rather than silently dropping its partition's contribution.
pub fn run_locked(data: &[i32], workers: usize) -> Result<Reduction, ExecutorError> {
    let ranges = partition(data.len(), workers)?;
    let shared = Mutex::new(Accumulator::new());

    thread::scope(|scope| {
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| {
                let shared = &shared;
                scope.spawn(move || {
                    for &x in &data[range] {
                        if is_even(x) {
                            // Poisoning only happens if another worker died
                            // mid-update; that run already fails at join, so
                            // recovering the guard here is safe.
                            let mut acc = shared
                                .lock()
                                .unwrap_or_else(PoisonError::into_inner);
                            acc.record(x);
                        }
                    }
                })
            })
            .collect();

        join_workers(handles)
    })?;

    let acc = shared.into_inner().unwrap_or_else(PoisonError::into_inner);
    Ok(acc.finish())
}

/// Join every worker, mapping the first panic to
/// [`ExecutorError::WorkerPanicked`].
///
/// All handles are joined even after a failure, so a second panicking
/// worker can't escape the scope and abort the process.
pub(crate) fn join_workers(
    handles: Vec<thread::ScopedJoinHandle<'_, ()>>,
) -> Result<(), ExecutorError> {
    let mut first_failure = None;
    for (index, handle) in handles.into_iter().enumerate() {
        if let Err(panic) = handle.join() {
            first_failure.get_or_insert(ExecutorError::WorkerPanicked {
                index,
                message: panic_message(panic.as_ref()),
            });
        }
    }

    match first_failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Best-effort extraction of a panic payload string.
fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_sequential;

    #[test]
    fn matches_oracle_for_every_worker_count() {
        let data: Vec<i32> = (0..97).map(|i| i * 3 - 50).collect();
        let oracle = run_sequential(&data);
        for workers in 1..=16 {
            assert_eq!(run_locked(&data, workers).unwrap(), oracle);
        }
    }

    #[test]
    fn degenerate_partitions_contribute_nothing() {
        let data = [1, 3, 5];
        let r = run_locked(&data, 4).unwrap();
        assert_eq!(r.sum, 0);
        assert_eq!(r.max, crate::NO_EVEN_SENTINEL);
        assert_eq!(r.result, -2);
    }

    #[test]
    fn empty_dataset() {
        let r = run_locked(&[], 8).unwrap();
        assert_eq!(r.result, -2);
    }

    #[test]
    fn zero_workers_fails_before_spawning() {
        assert!(matches!(
            run_locked(&[2, 4], 0),
            Err(ExecutorError::InvalidWorkerCount(0))
        ));
    }

    #[test]
    fn panicking_worker_fails_the_run() {
        // Silence the default panic printout for the deliberate panic below.
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));

        let result = thread::scope(|scope| {
            let handles = vec![
                scope.spawn(|| {}),
                scope.spawn(|| panic!("partition worker exploded")),
                scope.spawn(|| {}),
            ];
            join_workers(handles)
        });

        std::panic::set_hook(previous_hook);

        match result.unwrap_err() {
            ExecutorError::WorkerPanicked { index, message } => {
                assert_eq!(index, 1);
                assert!(message.contains("partition worker exploded"));
            }
            other => panic!("expected WorkerPanicked, got {other:?}"),
        }
    }

    #[test]
    fn panic_payload_extraction_covers_common_types() {
        let static_str: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(static_str.as_ref()), "boom");

        let owned: Box<dyn std::any::Any + Send> = Box::new("boom owned".to_string());
        assert_eq!(panic_message(owned.as_ref()), "boom owned");

        let opaque: Box<dyn std::any::Any + Send> = Box::new(42u32);
        assert_eq!(panic_message(opaque.as_ref()), "unknown panic");
    }
}
