//! Summary Statistics
//!
//! All metrics are computed over the full sample set. With only a handful of
//! timed runs per strategy there is no outlier-cleaning step: slow runs are
//! part of the signal being compared.

use serde::{Deserialize, Serialize};

/// Summary of one strategy's timing samples (nanoseconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Arithmetic mean.
    pub mean: f64,
    /// 50th percentile.
    pub median: f64,
    /// Sample standard deviation (n-1 denominator).
    pub std_dev: f64,
    /// Fastest sample.
    pub min: f64,
    /// Slowest sample.
    pub max: f64,
    /// 90th percentile.
    pub p90: f64,
    /// 95th percentile.
    pub p95: f64,
    /// 99th percentile.
    pub p99: f64,
    /// Number of samples summarized.
    pub sample_count: usize,
}

impl TimingSummary {
    /// Relative standard deviation in percent. Zero mean yields zero.
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            (self.std_dev / self.mean) * 100.0
        }
    }
}

/// Percentile by linear interpolation between nearest ranks.
///
/// `sorted` must already be ascending; sorting once in the caller avoids
/// re-sorting per percentile.
pub fn percentile_of_sorted(sorted: &[f64], percentile: f64) -> f64 {
    match sorted {
        [] => 0.0,
        [only] => *only,
        _ => {
            let rank = (percentile / 100.0) * (sorted.len() - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = (lower + 1).min(sorted.len() - 1);
            let fraction = rank - lower as f64;
            sorted[lower] + fraction * (sorted[upper] - sorted[lower])
        }
    }
}

/// Compute the full summary for a set of timing samples.
pub fn compute_summary(samples: &[f64]) -> TimingSummary {
    if samples.is_empty() {
        return TimingSummary {
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            p90: 0.0,
            p95: 0.0,
            p99: 0.0,
            sample_count: 0,
        };
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    TimingSummary {
        mean,
        median: percentile_of_sorted(&sorted, 50.0),
        std_dev,
        min: sorted[0],
        max: sorted[n - 1],
        p90: percentile_of_sorted(&sorted, 90.0),
        p95: percentile_of_sorted(&sorted, 95.0),
        p99: percentile_of_sorted(&sorted, 99.0),
        sample_count: n,
    }
}
