//! File discovery for report generation
//!
//! Walks a root directory, applies an optional explicit ignore file in
//! gitignore syntax (glob wildcards, per-directory anchoring, negation
//! lines, all relative to the scanned root), and returns Python sources in
//! lexicographic relative-path order, the deterministic order the renderer
//! relies on.

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::WalkBuilder;

use crate::config::ReportConfig;
use crate::error::{OutlineError, Result};

/// Extensions recognized as Python source
pub const PYTHON_EXTENSIONS: &[&str] = &["py", "pyi", "pyw"];

/// A discovered file ready for outline processing
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Full path to the file
    pub path: PathBuf,
    /// `/`-separated path relative to the discovery root
    pub relative_path: String,
}

/// Check whether a path looks like a Python source file
pub fn is_python_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| PYTHON_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Discover all Python sources under `root`, honoring the configured ignore
/// file, sorted lexicographically by relative path
pub fn discover_files(root: &Path, config: &ReportConfig) -> Result<Vec<DiscoveredFile>> {
    if !std::fs::metadata(root)?.is_dir() {
        return Err(OutlineError::walk(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let matcher = build_matcher(root, config)?;

    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).standard_filters(false).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file || !is_python_source(path) {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if let Some(matcher) = &matcher {
            if matcher.matched_path_or_any_parents(relative, false).is_ignore() {
                tracing::debug!(path = %relative.display(), "excluded by ignore pattern");
                continue;
            }
        }
        files.push(DiscoveredFile {
            path: path.to_path_buf(),
            relative_path: to_relative_string(relative),
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(files)
}

/// Compile the configured ignore file, rooted at the scan root.
/// A missing ignore file means no exclusions.
fn build_matcher(root: &Path, config: &ReportConfig) -> Result<Option<Gitignore>> {
    let Some(ignore_file) = &config.ignore_file else {
        return Ok(None);
    };
    if !ignore_file.exists() {
        return Ok(None);
    }

    let mut builder = GitignoreBuilder::new(root);
    if let Some(err) = builder.add(ignore_file) {
        return Err(OutlineError::walk(err.to_string()));
    }
    let matcher = builder
        .build()
        .map_err(|err| OutlineError::walk(err.to_string()))?;
    Ok(Some(matcher))
}

fn to_relative_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
