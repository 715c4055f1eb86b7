//! Dataset Partitioning
//!
//! Splits `[0, len)` into one contiguous half-open range per worker. Chunk
//! size is `len / workers` (floor); every range except the last has exactly
//! that length and the last absorbs the remainder, so the ranges are
//! pairwise disjoint and cover the dataset exactly.

use crate::ExecutorError;
use std::ops::Range;

/// Compute the index range each of `workers` threads scans.
///
/// `workers` may exceed `len`; with `len / workers == 0` every non-final
/// range is empty and the last range carries the whole dataset. `workers ==
/// 0` is rejected before any division happens.
pub fn partition(len: usize, workers: usize) -> Result<Vec<Range<usize>>, ExecutorError> {
    if workers == 0 {
        return Err(ExecutorError::InvalidWorkerCount(0));
    }

    let chunk = len / workers;
    let ranges = (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i == workers - 1 { len } else { start + chunk };
            start..end
        })
        .collect();

    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Disjointness + exact coverage of [0, len).
    fn assert_covers(len: usize, ranges: &[Range<usize>]) {
        let mut next = 0;
        for range in ranges {
            assert_eq!(range.start, next, "ranges must be contiguous");
            assert!(range.start <= range.end);
            next = range.end;
        }
        assert_eq!(next, len, "ranges must cover the dataset exactly");
    }

    #[test]
    fn zero_workers_is_an_error() {
        let err = partition(10, 0).unwrap_err();
        assert!(matches!(err, ExecutorError::InvalidWorkerCount(0)));
    }

    #[test]
    fn even_split() {
        let ranges = partition(12, 4).unwrap();
        assert_eq!(ranges, vec![0..3, 3..6, 6..9, 9..12]);
    }

    #[test]
    fn last_range_absorbs_the_remainder() {
        let ranges = partition(10, 3).unwrap();
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
        assert_eq!(ranges.last().unwrap().len(), 4);
    }

    #[test]
    fn more_workers_than_elements() {
        let ranges = partition(2, 5).unwrap();
        assert_eq!(ranges.len(), 5);
        // chunk = 0: four empty ranges, the last carries everything
        assert!(ranges[..4].iter().all(|r| r.is_empty()));
        assert_eq!(ranges[4], 0..2);
        assert_covers(2, &ranges);
    }

    #[test]
    fn empty_dataset() {
        let ranges = partition(0, 3).unwrap();
        assert_eq!(ranges.len(), 3);
        assert!(ranges.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn coverage_holds_across_a_grid_of_shapes() {
        for len in [0, 1, 2, 7, 31, 32, 33, 100, 1024, 1025] {
            for workers in [1, 2, 3, 8, 31, 32, 33, 64] {
                let ranges = partition(len, workers).unwrap();
                assert_eq!(ranges.len(), workers);
                assert_covers(len, &ranges);
                // Only the last range may be longer than the chunk
                let chunk = len / workers;
                for r in &ranges[..workers - 1] {
                    assert_eq!(r.len(), chunk, "len={len} workers={workers}");
                }
            }
        }
    }
}
