//! Coverage Summary Library
//!
//! A stateless, reusable library that reads JaCoCo-style XML coverage reports
//! and renders a per-metric summary (missed/covered counts and percentage).
//!
//! # Architecture
//!
//! A run is a single linear pass:
//! - Check that the report file exists (a missing report is not an error)
//! - Strip any DOCTYPE declaration so no entity is ever resolved
//! - Parse the XML into an ordered view of the root's direct children
//! - Project every top-level `<counter>` into a [`CounterRecord`]
//! - Emit one formatted line per counter between two separator lines
//!
//! The library does NOT:
//! - Decide where the report lives
//! - Configure the logging backend
//! - Fail a build on a bad report
//!
//! Those concerns belong to the application layer (coverage-summary-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use coverage_summary::{ReportSummarizer, SummaryConfig};
//! use std::path::Path;
//!
//! let summarizer = ReportSummarizer::with_config(SummaryConfig::new().with_banner(false));
//!
//! // Logs the summary through the `log` facade; errors are logged, never returned
//! summarizer.run(Path::new("target/site/jacoco/jacoco.xml"));
//!
//! // Or collect the lines yourself
//! let mut lines: Vec<String> = Vec::new();
//! summarizer.run_with_sink(Path::new("target/site/jacoco/jacoco.xml"), &mut lines);
//! for line in lines {
//!     println!("{}", line);
//! }
//! ```

// Public modules
pub mod config;
pub mod format;
pub mod report;
pub mod sanitize;
pub mod summarizer;
pub mod types;

// Re-export main types for convenience
pub use config::SummaryConfig;
pub use report::{CoverageReport, ReportElement};
pub use summarizer::{LogSink, ReportSummarizer, Summary, SummarySink};
pub use types::{CounterRecord, ReportError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
