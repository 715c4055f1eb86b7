//! Dataset Provider
//!
//! Generates the fixed array of integers every executor reduces. Values are
//! drawn uniformly from an inclusive range; an optional seed makes runs
//! reproducible.

use anyhow::bail;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `len` integers uniformly distributed in `[min_value, max_value]`.
pub fn generate(
    len: usize,
    min_value: i32,
    max_value: i32,
    seed: Option<u64>,
) -> anyhow::Result<Vec<i32>> {
    if min_value > max_value {
        bail!(
            "invalid dataset range: min_value {} > max_value {}",
            min_value,
            max_value
        );
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Ok((0..len)
        .map(|_| rng.gen_range(min_value..=max_value))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_length_and_bounds() {
        let data = generate(1000, -50, 50, Some(1)).unwrap();
        assert_eq!(data.len(), 1000);
        assert!(data.iter().all(|&x| (-50..=50).contains(&x)));
    }

    #[test]
    fn same_seed_same_dataset() {
        let a = generate(256, 0, 10_000, Some(42)).unwrap();
        let b = generate(256, 0, 10_000, Some(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate(256, 0, 10_000, Some(1)).unwrap();
        let b = generate(256, 0, 10_000, Some(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn degenerate_range_is_constant() {
        let data = generate(16, 7, 7, None).unwrap();
        assert!(data.iter().all(|&x| x == 7));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(generate(16, 10, -10, None).is_err());
    }
}
