//! Core types for the coverage summary library
//!
//! This module defines the records the summarizer projects out of a coverage
//! report, and the error type shared by every stage of a run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// One coverage metric read from a `<counter>` element
///
/// Projection of the element's `type`, `missed` and `covered` attributes.
/// The `kind` keeps the spelling used in the report (`INSTRUCTION`, `line`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRecord {
    /// Metric name from the `type` attribute (never empty)
    pub kind: String,
    /// Number of missed units
    pub missed: u64,
    /// Number of covered units
    pub covered: u64,
}

impl CounterRecord {
    /// Create a new counter record
    pub fn new(kind: impl Into<String>, missed: u64, covered: u64) -> Self {
        Self {
            kind: kind.into(),
            missed,
            covered,
        }
    }

    /// True if this counter is the instruction counter (case-insensitive)
    pub fn is_instruction(&self) -> bool {
        self.kind.eq_ignore_ascii_case("instruction")
    }

    /// Covered units relative to missed units, as an integer percentage
    ///
    /// Computes `covered * 100 / missed`. Returns `None` when `missed` is zero
    /// or the multiplication overflows.
    pub fn percentage(&self) -> Option<u64> {
        self.covered
            .checked_mul(100)
            .and_then(|scaled| scaled.checked_div(self.missed))
    }
}

impl fmt::Display for CounterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (missed={}, covered={})", self.kind, self.missed, self.covered)
    }
}

/// Errors that can occur while summarizing a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to read report {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed report XML at byte {position}: {message}")]
    Parse { position: u64, message: String },

    #[error("Invalid counter #{index}: {reason}")]
    InvalidCounter { index: usize, reason: String },
}

impl ReportError {
    pub(crate) fn parse(position: u64, message: impl Into<String>) -> Self {
        ReportError::Parse {
            position,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_counter(index: usize, reason: impl Into<String>) -> Self {
        ReportError::InvalidCounter {
            index,
            reason: reason.into(),
        }
    }
}
