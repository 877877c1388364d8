//! Coverage Summary CLI Application
//!
//! This is the build-step front end for the coverage-summary library.
//! It resolves the report path from the command line or a config file,
//! sets up logging, and runs the summarizer. A missing or broken report
//! never fails the step.

use anyhow::Result;
use clap::Parser;
use coverage_summary::{ReportSummarizer, SummaryConfig};
use std::path::PathBuf;

mod config;

/// Coverage Summary - Print a per-metric summary of a JaCoCo XML report
#[derive(Parser, Debug)]
#[command(name = "coverage-summary")]
#[command(about = "Summarize a JaCoCo XML coverage report", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the XML coverage report
    #[arg(short, long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Path to configuration file (coverage-summary.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not print the "Coverage Results" banner
    #[arg(long)]
    no_banner: bool,

    /// Padding width of the type, missed and covered columns
    #[arg(long, value_name = "WIDTH")]
    column_width: Option<usize>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::debug!("Coverage Summary CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using coverage-summary library v{}", coverage_summary::VERSION);

    let app_config = match &args.config {
        Some(config_path) => {
            log::debug!("Loading configuration from: {:?}", config_path);
            config::load_config(config_path)?
        }
        None => config::AppConfig::default(),
    };

    let (report_path, summary_config) = resolve(&args, app_config);
    log::debug!("Summarizing report: {:?}", report_path);

    // Outcome is already logged; a bad report does not fail the step
    ReportSummarizer::with_config(summary_config).run(&report_path);

    Ok(())
}

/// Merge command line flags over the config file
fn resolve(args: &Args, app_config: config::AppConfig) -> (PathBuf, SummaryConfig) {
    let report_path = args
        .report
        .clone()
        .or(app_config.report.path)
        .unwrap_or_default();

    let mut summary_config = app_config.output;
    if args.no_banner {
        summary_config = summary_config.with_banner(false);
    }
    if let Some(width) = args.column_width {
        summary_config = summary_config.with_column_width(width);
    }

    (report_path, summary_config)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
