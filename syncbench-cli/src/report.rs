//! Report Data Structures and Formatting
//!
//! Machine-readable JSON and human terminal output for one benchmark
//! invocation.

use crate::driver::StrategyOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use syncbench_core::{NO_EVEN_SENTINEL, Reduction};
use syncbench_stats::{TimingSummary, compute_summary};

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Invocation metadata
    pub meta: ReportMeta,
    /// Per-strategy results, sequential first
    pub results: Vec<StrategyReport>,
    /// Aggregate counts
    pub summary: RunSummary,
}

/// Invocation metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// syncbench version
    pub version: String,
    /// When the run started
    pub timestamp: DateTime<Utc>,
    /// Dataset shape
    pub dataset: DatasetInfo,
    /// Worker threads per parallel executor
    pub threads: usize,
    /// Timed runs per strategy
    pub runs: usize,
}

/// Dataset shape recorded for reproducibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Element count
    pub len: usize,
    /// Inclusive lower bound of generated values
    pub min_value: i32,
    /// Inclusive upper bound of generated values
    pub max_value: i32,
    /// RNG seed, if the dataset was reproducible
    pub seed: Option<u64>,
}

/// One strategy's result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyReport {
    /// Strategy label
    pub name: String,
    /// Final reduction (sum, max, derived result)
    pub reduction: Reduction,
    /// Whether every run matched the sequential oracle
    pub verified: bool,
    /// Timing summary over all runs (nanoseconds)
    pub timing: TimingSummary,
}

/// Aggregate counts for the invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Strategies executed
    pub strategies: usize,
    /// Strategies that reproduced the oracle on every run
    pub verified: usize,
    /// Strategies with at least one diverging run
    pub mismatches: usize,
    /// Wall-clock duration of the whole suite in milliseconds
    pub total_duration_ms: f64,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Assemble the report from driver outcomes.
pub fn build_report(
    outcomes: &[StrategyOutcome],
    meta: ReportMeta,
    total_duration_ms: f64,
) -> Report {
    let results: Vec<StrategyReport> = outcomes
        .iter()
        .map(|o| StrategyReport {
            name: o.name.clone(),
            reduction: o.reduction,
            verified: o.verified,
            timing: compute_summary(&o.samples_ns),
        })
        .collect();

    let verified = results.iter().filter(|r| r.verified).count();
    let summary = RunSummary {
        strategies: results.len(),
        verified,
        mismatches: results.len() - verified,
        total_duration_ms,
    };

    Report {
        meta,
        results,
        summary,
    }
}

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Format a nanosecond duration with an adaptive unit.
pub fn format_duration(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{:.0} ns", ns)
    } else if ns < 1_000_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else {
        format!("{:.3} s", ns / 1_000_000_000.0)
    }
}

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("SyncBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    let seed = report
        .meta
        .dataset
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "entropy".to_string());
    output.push_str(&format!(
        "Dataset: {} values in [{}, {}] (seed: {})\n",
        report.meta.dataset.len,
        report.meta.dataset.min_value,
        report.meta.dataset.max_value,
        seed
    ));
    output.push_str(&format!(
        "Threads: {}   Runs per strategy: {}\n\n",
        report.meta.threads, report.meta.runs
    ));

    let baseline_mean = report
        .results
        .first()
        .map(|r| r.timing.mean)
        .unwrap_or(0.0);

    for result in &report.results {
        let status_icon = if result.verified { "✓" } else { "✗" };
        output.push_str(&format!("{} {}\n", status_icon, result.name));

        let max_display = if result.reduction.max == NO_EVEN_SENTINEL {
            "none (sentinel -1)".to_string()
        } else {
            result.reduction.max.to_string()
        };
        output.push_str(&format!(
            "    sum = {}   max even = {}   result = {}\n",
            result.reduction.sum, max_display, result.reduction.result
        ));

        output.push_str(&format!(
            "    mean: {}   median: {}   stddev: {}\n",
            format_duration(result.timing.mean),
            format_duration(result.timing.median),
            format_duration(result.timing.std_dev),
        ));
        output.push_str(&format!(
            "    min: {}   max: {}   cv: {:.1}%\n",
            format_duration(result.timing.min),
            format_duration(result.timing.max),
            result.timing.coefficient_of_variation(),
        ));

        if baseline_mean > 0.0 && result.name != "sequential" {
            let speedup = baseline_mean / result.timing.mean.max(f64::EPSILON);
            output.push_str(&format!("    speedup vs sequential: {:.2}x\n", speedup));
        }
        if !result.verified {
            output.push_str("    MISMATCH against the sequential oracle\n");
        }
        output.push('\n');
    }

    output.push_str("Summary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  Strategies: {}  Verified: {}  Mismatches: {}  Total: {:.1} ms\n",
        report.summary.strategies,
        report.summary.verified,
        report.summary.mismatches,
        report.summary.total_duration_ms
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_outcome(name: &str, verified: bool) -> StrategyOutcome {
        StrategyOutcome {
            name: name.to_string(),
            reduction: Reduction {
                sum: 12,
                max: 6,
                result: 0,
            },
            verified,
            samples_ns: vec![1_000.0, 2_000.0, 3_000.0],
        }
    }

    fn dummy_meta() -> ReportMeta {
        ReportMeta {
            version: "0.1.0".to_string(),
            timestamp: Utc::now(),
            dataset: DatasetInfo {
                len: 3,
                min_value: 0,
                max_value: 10,
                seed: Some(42),
            },
            threads: 4,
            runs: 3,
        }
    }

    #[test]
    fn build_report_counts_mismatches() {
        let outcomes = vec![
            dummy_outcome("sequential", true),
            dummy_outcome("locked", true),
            dummy_outcome("lock-free", false),
        ];
        let report = build_report(&outcomes, dummy_meta(), 12.5);

        assert_eq!(report.summary.strategies, 3);
        assert_eq!(report.summary.verified, 2);
        assert_eq!(report.summary.mismatches, 1);
        assert_eq!(report.results[1].timing.sample_count, 3);
        assert!((report.results[0].timing.mean - 2_000.0).abs() < 1e-9);
    }

    #[test]
    fn json_report_round_trips() {
        let outcomes = vec![dummy_outcome("sequential", true)];
        let report = build_report(&outcomes, dummy_meta(), 1.0);
        let json = generate_json_report(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].reduction.sum, 12);
    }

    #[test]
    fn output_format_parses() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "human".parse::<OutputFormat>().unwrap(),
            OutputFormat::Human
        );
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn duration_units_scale() {
        assert_eq!(format_duration(500.0), "500 ns");
        assert_eq!(format_duration(1_500.0), "1.50 µs");
        assert_eq!(format_duration(2_500_000.0), "2.50 ms");
        assert_eq!(format_duration(1_250_000_000.0), "1.250 s");
    }

    #[test]
    fn human_output_flags_mismatches() {
        let outcomes = vec![
            dummy_outcome("sequential", true),
            dummy_outcome("locked", false),
        ];
        let report = build_report(&outcomes, dummy_meta(), 1.0);
        let text = format_human_output(&report);
        assert!(text.contains("MISMATCH"));
        assert!(text.contains("✗ locked"));
        assert!(text.contains("✓ sequential"));
    }
}
