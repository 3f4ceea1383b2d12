//! Configuration for report generation
//!
//! Configuration is an explicit value handed to the driver, never
//! process-wide state.

use std::path::{Path, PathBuf};

/// Default destination file name for the generated report
pub const DEFAULT_REPORT_FILE: &str = "report.txt";

/// Configuration for one report-generation run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Destination file for the rendered report
    pub report_file: PathBuf,
    /// Optional ignore file in gitignore syntax, applied relative to the
    /// scanned root
    pub ignore_file: Option<PathBuf>,
    /// Whether to parse files in parallel
    pub parallel: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
            ignore_file: None,
            parallel: false,
        }
    }
}

impl ReportConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report destination file
    pub fn with_report_file(mut self, path: impl AsRef<Path>) -> Self {
        self.report_file = path.as_ref().to_path_buf();
        self
    }

    /// Set the ignore file
    pub fn with_ignore_file(mut self, path: impl AsRef<Path>) -> Self {
        self.ignore_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable parallel parsing
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
