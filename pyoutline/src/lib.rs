//! # pyoutline
//!
//! Structural outline reports for Python codebases.
//!
//! Extracts imports, classes, functions, and variable bindings from every
//! Python file under a directory tree and renders them as a flat,
//! deterministic text report: a fast overview of a codebase without reading
//! full file contents.
//!
//! The core pipeline is discover, then parse, then render:
//!
//! - [`discovery`] walks the tree with gitignore-style exclusion
//! - [`parser`] turns one file's text into a [`FileOutline`]
//! - [`report`] serializes the per-file results into the final report text
//!
//! A single malformed file never aborts a run: it degrades to a one-line
//! stub in the report and processing continues.
//!
//! ```no_run
//! use pyoutline::{generate_report, ReportConfig};
//!
//! let config = ReportConfig::new().with_parallel(true);
//! let report = generate_report(std::path::Path::new("./my-project"), &config)?;
//! println!("{report}");
//! # Ok::<(), pyoutline::OutlineError>(())
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod report;
pub mod types;

use std::path::Path;

use rayon::prelude::*;

pub use config::{ReportConfig, DEFAULT_REPORT_FILE};
pub use discovery::{discover_files, DiscoveredFile};
pub use error::{OutlineError, Result};
pub use report::{render_json, render_report};
pub use types::{
    ClassMember, ClassNode, FileOutline, FileReport, FunctionNode, ImportNode, ParseFailure,
    TopLevelNode, VarNode,
};

/// Generate the text report for pre-loaded `(relative_path, file_text)`
/// entries, preserving their order.
///
/// This is the reusable core behind the directory driver: no I/O, total over
/// arbitrary inputs.
pub fn generate_report_from_entries(entries: &[(String, String)]) -> String {
    let reports: Vec<FileReport> = entries
        .iter()
        .map(|(relative_path, text)| outline_entry(relative_path, text))
        .collect();
    render_report(&reports)
}

/// Outline every Python file under `root`, one [`FileReport`] per file in
/// lexicographic relative-path order.
///
/// Per-file read and parse failures degrade to failed entries; only a
/// failure to walk the root itself is an error.
pub fn outline_tree(root: &Path, config: &ReportConfig) -> Result<Vec<FileReport>> {
    let files = discover_files(root, config)?;
    tracing::debug!(count = files.len(), "discovered python sources");

    let reports = if config.parallel {
        // Indexed parallel collect preserves input order, so the rendered
        // output is identical to the serial pass.
        files.par_iter().map(read_and_outline).collect()
    } else {
        files.iter().map(read_and_outline).collect()
    };
    Ok(reports)
}

/// Generate the full text report for the tree rooted at `root`
pub fn generate_report(root: &Path, config: &ReportConfig) -> Result<String> {
    let reports = outline_tree(root, config)?;
    Ok(render_report(&reports))
}

fn read_and_outline(file: &DiscoveredFile) -> FileReport {
    match std::fs::read_to_string(&file.path) {
        Ok(text) => outline_entry(&file.relative_path, &text),
        Err(err) => {
            tracing::warn!(path = %file.relative_path, error = %err, "file could not be read");
            FileReport::failed(
                &file.relative_path,
                format!("could not be read: {err}"),
            )
        }
    }
}

fn outline_entry(relative_path: &str, text: &str) -> FileReport {
    match parser::parse_source(text) {
        Ok(outline) => FileReport::outline(relative_path, outline),
        Err(err) => {
            tracing::warn!(path = %relative_path, error = %err, "file could not be parsed");
            FileReport::failed(relative_path, format!("could not be parsed: {err}"))
        }
    }
}
