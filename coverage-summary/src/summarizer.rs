//! Main summarizer API
//!
//! [`ReportSummarizer`] is the entry point of the library. A run checks that the
//! report exists, reads and sanitizes it, parses it, and emits one line per
//! top-level counter between two separator lines.
//!
//! Failures never escape [`ReportSummarizer::run`]: they are logged and the run
//! ends. Callers that want the error use [`ReportSummarizer::summarize`].

use crate::config::SummaryConfig;
use crate::format::{self, BANNER, NOT_FOUND_MESSAGE, SEPARATOR};
use crate::report::CoverageReport;
use crate::sanitize::strip_doctype;
use crate::types::{CounterRecord, ReportError, Result};
use std::error::Error as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Log target used for summary lines
pub const LOG_TARGET: &str = "coverage_summary";

/// Destination of the lines produced by a run
pub trait SummarySink {
    /// Emit one line
    fn emit(&mut self, line: &str);
}

/// Sink that forwards every line to the `log` facade at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SummarySink for LogSink {
    fn emit(&mut self, line: &str) {
        log::info!(target: LOG_TARGET, "{}", line);
    }
}

impl SummarySink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Outcome of a successful summarize step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// No report file at the given path
    NotFound(PathBuf),
    /// Parsed report with its top-level counters in document order
    Report {
        /// Tag name of the root element
        root: String,
        counters: Vec<CounterRecord>,
    },
}

impl Summary {
    /// Render the lines a run emits for this summary
    pub fn lines(&self, config: &SummaryConfig) -> Vec<String> {
        match self {
            Summary::NotFound(_) => vec![NOT_FOUND_MESSAGE.to_string()],
            Summary::Report { counters, .. } => {
                let mut lines = Vec::with_capacity(counters.len() + 5);
                if config.show_banner {
                    lines.extend(BANNER.iter().map(|line| line.to_string()));
                }
                lines.push(SEPARATOR.to_string());
                lines.extend(
                    counters
                        .iter()
                        .map(|counter| format::format_counter(counter, config.column_width)),
                );
                lines.push(SEPARATOR.to_string());
                lines
            }
        }
    }

    /// Counters of the summary (empty when the report was not found)
    pub fn counters(&self) -> &[CounterRecord] {
        match self {
            Summary::NotFound(_) => &[],
            Summary::Report { counters, .. } => counters,
        }
    }
}

/// Summarizes JaCoCo-style XML coverage reports
#[derive(Debug, Clone, Default)]
pub struct ReportSummarizer {
    config: SummaryConfig,
}

impl ReportSummarizer {
    /// Create a summarizer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a summarizer with a custom configuration
    pub fn with_config(config: SummaryConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Read, sanitize and parse the report at `path`
    ///
    /// A missing file is not an error: it yields [`Summary::NotFound`].
    /// This step never logs at info level or above.
    ///
    /// # Example
    /// ```no_run
    /// use coverage_summary::{ReportSummarizer, Summary};
    /// use std::path::Path;
    ///
    /// let summarizer = ReportSummarizer::new();
    /// match summarizer.summarize(Path::new("target/site/jacoco/jacoco.xml")) {
    ///     Ok(Summary::Report { counters, .. }) => println!("{} counters", counters.len()),
    ///     Ok(Summary::NotFound(path)) => println!("nothing at {:?}", path),
    ///     Err(e) => eprintln!("Error: {}", e),
    /// }
    /// ```
    pub fn summarize(&self, path: &Path) -> Result<Summary> {
        if !path.is_file() {
            log::debug!("No coverage report at {:?}", path);
            return Ok(Summary::NotFound(path.to_path_buf()));
        }

        log::debug!("Reading coverage report: {:?}", path);
        let content = fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let sanitized = strip_doctype(&content);
        let report = CoverageReport::parse(&sanitized)?;
        let counters = report.counters()?;

        log::debug!("Found {} top-level counters in {:?}", counters.len(), path);

        Ok(Summary::Report {
            root: report.root().name().to_string(),
            counters,
        })
    }

    /// Summarize the report at `path` and log the result
    ///
    /// Returns the summary when the run got that far; failures are logged at
    /// error level and yield `None`.
    pub fn run(&self, path: &Path) -> Option<Summary> {
        self.run_with_sink(path, &mut LogSink)
    }

    /// Same as [`run`](Self::run), emitting the summary lines into `sink`
    pub fn run_with_sink(&self, path: &Path, sink: &mut dyn SummarySink) -> Option<Summary> {
        match self.summarize(path) {
            Ok(summary) => {
                for line in summary.lines(&self.config) {
                    sink.emit(&line);
                }
                Some(summary)
            }
            Err(err) => {
                log::error!(
                    "Failed to summarize coverage report {:?}: {}",
                    path,
                    error_chain(&err)
                );
                None
            }
        }
    }
}

/// Render an error followed by its source chain
fn error_chain(err: &ReportError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
