//! Reducer Semantics
//!
//! The single reduction every executor must implement identically:
//! sum of all even values plus the running maximum even value, finished
//! into the scalar `2 * max - sum`.

use serde::{Deserialize, Serialize};

/// Maximum-even sentinel meaning "no even value seen yet".
///
/// `-1` is odd, so it can never collide with a real contribution. The first
/// even contribution always replaces the sentinel, which is what makes
/// negative maxima work: for `[-4, -2, 3]` the final max is `-2`, not the
/// sentinel (a plain `x > max` against `-1` would discard every negative
/// even).
pub const NO_EVEN_SENTINEL: i32 = -1;

/// Mutable reduction state: one per executor run.
///
/// Sum is widened to `i64` so that datasets far larger than `i32::MAX / max`
/// elements cannot overflow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator {
    /// Sum of every even value recorded so far.
    pub sum: i64,
    /// Largest even value recorded so far, or [`NO_EVEN_SENTINEL`].
    pub max: i32,
}

impl Accumulator {
    /// Fresh accumulator: zero sum, sentinel max.
    pub fn new() -> Self {
        Self {
            sum: 0,
            max: NO_EVEN_SENTINEL,
        }
    }

    /// Record one value. Odd values are ignored.
    #[inline]
    pub fn record(&mut self, x: i32) {
        if is_even(x) {
            self.sum += x as i64;
            if self.max == NO_EVEN_SENTINEL || x > self.max {
                self.max = x;
            }
        }
    }

    /// Convert the final state into a [`Reduction`].
    pub fn finish(self) -> Reduction {
        Reduction {
            sum: self.sum,
            max: self.max,
            result: derive_result(self.sum, self.max),
        }
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `x` contributes to the reduction.
///
/// Rust's `%` truncates toward zero, but `x % 2 == 0` is sign-agnostic
/// either way (zero has no sign), so negative evens are detected correctly.
#[inline]
pub fn is_even(x: i32) -> bool {
    x % 2 == 0
}

/// The derived scalar: `2 * max - sum`.
///
/// With no even values the formula degenerates to `2 * (-1) - 0 = -2`,
/// which is the defined output for that case, not an error.
#[inline]
pub fn derive_result(sum: i64, max: i32) -> i64 {
    2 * max as i64 - sum
}

/// Final output of one executor run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    /// Accumulated sum of even values.
    pub sum: i64,
    /// Maximum even value, or [`NO_EVEN_SENTINEL`] if none existed.
    pub max: i32,
    /// `2 * max - sum`.
    pub result: i64,
}
