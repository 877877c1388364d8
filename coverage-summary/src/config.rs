//! Summary configuration types
//!
//! The summarizer itself has very few knobs; everything about where the
//! report lives and how logging is set up belongs to the application layer.

use crate::format::DEFAULT_COLUMN_WIDTH;
use serde::{Deserialize, Serialize};

/// Configuration for the report summarizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Padding width of the type, missed and covered columns (default: 13)
    #[serde(default = "default_column_width")]
    pub column_width: usize,

    /// Whether to print the "Coverage Results" banner above the counters
    #[serde(default = "default_true")]
    pub show_banner: bool,
}

fn default_column_width() -> usize {
    DEFAULT_COLUMN_WIDTH
}

fn default_true() -> bool {
    true
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            column_width: default_column_width(),
            show_banner: true,
        }
    }
}

impl SummaryConfig {
    /// Create a new summary configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the column padding width
    pub fn with_column_width(mut self, width: usize) -> Self {
        self.column_width = width;
        self
    }

    /// Builder method: enable or disable the banner
    pub fn with_banner(mut self, enabled: bool) -> Self {
        self.show_banner = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SummaryConfig::new();
        assert_eq!(config.column_width, 13);
        assert!(config.show_banner);
    }

    #[test]
    fn test_summary_config_builder() {
        let config = SummaryConfig::new().with_column_width(20).with_banner(false);
        assert_eq!(config.column_width, 20);
        assert!(!config.show_banner);
    }
}
