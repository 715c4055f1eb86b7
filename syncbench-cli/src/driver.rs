//! Benchmark Driver
//!
//! Runs the three executors over the same dataset, times each run, and
//! verifies every parallel result against the sequential oracle. Timing
//! wraps the full run including worker startup and join.

use syncbench_core::{Reduction, Strategy, run_parallel, run_sequential};
use tracing::{debug, info, warn};

/// Collected samples and verification status for one strategy.
#[derive(Debug, Clone)]
pub struct StrategyOutcome {
    /// Strategy label ("sequential", "locked", "lock-free").
    pub name: String,
    /// Reduction produced by the final run.
    pub reduction: Reduction,
    /// Whether every run reproduced the sequential oracle.
    pub verified: bool,
    /// Wall-clock nanoseconds per run.
    pub samples_ns: Vec<f64>,
}

/// Run the full suite: sequential oracle first, then both parallel
/// strategies, `runs` timed runs each.
///
/// A worker panic aborts the suite; a numeric mismatch does not (it is
/// recorded so the report can fail the invocation after printing).
pub fn run_suite(data: &[i32], threads: usize, runs: usize) -> anyhow::Result<Vec<StrategyOutcome>> {
    let runs = runs.max(1);

    // Ground truth, timed like everything else. The scan is deterministic,
    // so the oracle comes from the first run and the rest only feed timing.
    let mut oracle_samples = Vec::with_capacity(runs);
    let start = std::time::Instant::now();
    let oracle = run_sequential(data);
    oracle_samples.push(start.elapsed().as_nanos() as f64);
    for run in 1..runs {
        let start = std::time::Instant::now();
        std::hint::black_box(run_sequential(data));
        let elapsed = start.elapsed().as_nanos() as f64;
        debug!(run, elapsed_ns = elapsed, "sequential run complete");
        oracle_samples.push(elapsed);
    }
    info!(
        sum = oracle.sum,
        max = oracle.max,
        result = oracle.result,
        "sequential oracle established"
    );

    let mut outcomes = vec![StrategyOutcome {
        name: "sequential".to_string(),
        reduction: oracle,
        verified: true,
        samples_ns: oracle_samples,
    }];

    for strategy in [Strategy::Locked, Strategy::LockFree] {
        let mut samples_ns = Vec::with_capacity(runs);
        let mut verified = true;
        let mut last = None;

        for run in 0..runs {
            let start = std::time::Instant::now();
            let reduction = run_parallel(data, threads, strategy)?;
            let elapsed = start.elapsed().as_nanos() as f64;
            debug!(%strategy, run, elapsed_ns = elapsed, "parallel run complete");
            samples_ns.push(elapsed);

            if reduction != oracle {
                warn!(
                    %strategy,
                    run,
                    got = ?reduction,
                    expected = ?oracle,
                    "result diverged from sequential oracle"
                );
                verified = false;
            }
            last = Some(reduction);
        }

        info!(%strategy, verified, "strategy complete");
        outcomes.push(StrategyOutcome {
            name: strategy.to_string(),
            reduction: last.unwrap_or(oracle),
            verified,
            samples_ns,
        });
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suite_produces_three_verified_outcomes() {
        let data: Vec<i32> = (0..500).map(|i| i - 250).collect();
        let outcomes = run_suite(&data, 8, 3).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].name, "sequential");
        assert_eq!(outcomes[1].name, "locked");
        assert_eq!(outcomes[2].name, "lock-free");

        let oracle = outcomes[0].reduction;
        for outcome in &outcomes {
            assert!(outcome.verified, "{} diverged", outcome.name);
            assert_eq!(outcome.reduction, oracle);
            assert_eq!(outcome.samples_ns.len(), 3);
            assert!(outcome.samples_ns.iter().all(|&ns| ns >= 0.0));
        }
    }

    #[test]
    fn zero_runs_is_clamped_to_one() {
        let outcomes = run_suite(&[2, 4, 6], 2, 0).unwrap();
        assert!(outcomes.iter().all(|o| o.samples_ns.len() == 1));
    }

    #[test]
    fn zero_threads_propagates_the_core_error() {
        assert!(run_suite(&[1, 2, 3], 0, 1).is_err());
    }
}
