#![warn(missing_docs)]
//! SyncBench CLI Library
//!
//! The benchmark driver: generates the dataset, runs the sequential oracle
//! and both parallel strategies, verifies their results against each other,
//! and reports timings. Use `syncbench_cli::run()` from the binary's main.

mod config;
mod dataset;
mod driver;
mod report;

pub use config::{BenchConfig, DatasetConfig, OutputConfig, RunnerConfig};
pub use dataset::generate;
pub use driver::{StrategyOutcome, run_suite};
pub use report::{
    DatasetInfo, OutputFormat, Report, ReportMeta, RunSummary, StrategyReport, build_report,
    format_duration, format_human_output, generate_json_report,
};

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// SyncBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "syncbench")]
#[command(
    author,
    version,
    about = "SyncBench - lock-based vs lock-free parallel reduction benchmark"
)]
pub struct Cli {
    /// Optional subcommand; defaults to running the benchmark
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset length
    #[arg(long, short = 'n')]
    pub len: Option<usize>,

    /// Inclusive lower bound of generated values
    #[arg(long)]
    pub min_value: Option<i32>,

    /// Inclusive upper bound of generated values
    #[arg(long)]
    pub max_value: Option<i32>,

    /// RNG seed for a reproducible dataset
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads per parallel executor
    #[arg(long, short = 't')]
    pub threads: Option<usize>,

    /// Timed runs per strategy
    #[arg(long, short = 'r')]
    pub runs: Option<usize>,

    /// Output format: human, json
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default syncbench.toml to the current directory
    Init,
    /// Run the benchmark suite (default)
    Run,
}

/// Effective settings after layering syncbench.toml under CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Dataset length
    pub len: usize,
    /// Inclusive lower bound
    pub min_value: i32,
    /// Inclusive upper bound
    pub max_value: i32,
    /// Optional RNG seed
    pub seed: Option<u64>,
    /// Worker threads per parallel executor
    pub threads: usize,
    /// Timed runs per strategy
    pub runs: usize,
    /// Output format
    pub format: OutputFormat,
    /// Directory where a JSON copy of the report is saved when `--output`
    /// is not given; empty disables saving
    pub directory: String,
}

/// Layer configuration: file values first, CLI flags override.
pub fn resolve_settings(cli: &Cli, config: &BenchConfig) -> anyhow::Result<Settings> {
    let format_str = cli
        .format
        .clone()
        .unwrap_or_else(|| config.output.format.clone());
    let format = format_str
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(Settings {
        len: cli.len.unwrap_or(config.dataset.len),
        min_value: cli.min_value.unwrap_or(config.dataset.min_value),
        max_value: cli.max_value.unwrap_or(config.dataset.max_value),
        seed: cli.seed.or(config.dataset.seed),
        threads: cli.threads.unwrap_or(config.runner.threads),
        runs: cli.runs.unwrap_or(config.runner.runs),
        format,
        directory: config.output.directory.clone(),
    })
}

/// Run the SyncBench CLI. This is the main entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SyncBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("syncbench_cli=debug,syncbench_core=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("syncbench_cli=info,syncbench_core=info")
            .init();
    }

    if let Some(Commands::Init) = cli.command {
        return init_config();
    }

    // Discover syncbench.toml configuration (CLI flags override)
    let config = BenchConfig::discover().unwrap_or_default();
    let settings = resolve_settings(&cli, &config)?;

    run_benchmark(&cli, &settings)
}

/// Save a machine-readable copy of the report under the configured
/// directory. An empty directory string disables the copy.
fn save_report_copy(directory: &str, report: &Report) -> anyhow::Result<()> {
    if directory.is_empty() {
        return Ok(());
    }
    let dir = PathBuf::from(directory);
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("report.json");
    std::fs::write(&path, generate_json_report(report)?)?;
    eprintln!("Report saved to: {}", path.display());
    Ok(())
}

/// Write a default syncbench.toml unless one already exists.
fn init_config() -> anyhow::Result<()> {
    let path = PathBuf::from("syncbench.toml");
    if path.exists() {
        anyhow::bail!("syncbench.toml already exists in the current directory");
    }
    std::fs::write(&path, BenchConfig::default_toml())?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_benchmark(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    if settings.threads == 0 {
        anyhow::bail!("--threads must be at least 1");
    }

    info!(
        len = settings.len,
        min = settings.min_value,
        max = settings.max_value,
        seed = ?settings.seed,
        "generating dataset"
    );
    let data = dataset::generate(
        settings.len,
        settings.min_value,
        settings.max_value,
        settings.seed,
    )?;

    println!(
        "Running 3 strategies over {} values, {} threads, {} runs each...\n",
        settings.len, settings.threads, settings.runs
    );

    let start_time = Instant::now();
    let outcomes = driver::run_suite(&data, settings.threads, settings.runs)?;
    let total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    let meta = ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        dataset: DatasetInfo {
            len: settings.len,
            min_value: settings.min_value,
            max_value: settings.max_value,
            seed: settings.seed,
        },
        threads: settings.threads,
        runs: settings.runs,
    };
    let report = build_report(&outcomes, meta, total_duration_ms);

    let output = match settings.format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Human => format_human_output(&report),
    };

    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
        save_report_copy(&settings.directory, &report)?;
    }

    if report.summary.mismatches > 0 {
        eprintln!(
            "\n{} strategy result(s) diverged from the sequential oracle",
            report.summary.mismatches
        );
        std::process::exit(1);
    }

    Ok(())
}
