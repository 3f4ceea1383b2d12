//! pyoutline CLI - generate a text-based report of the code structure for
//! all Python files in a folder.
//!
//! Usage:
//! - `pyoutline <ROOT_FOLDER>`: write the report to `report.txt`
//! - `--report-file-path <PATH>`: change the report destination
//! - `--ignore-file-path <PATH>`: apply a gitignore-syntax exclusion file
//! - `--format text|json`: pick the report format
//! - `--stdout`: print the report instead of writing a file
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pyoutline::{render_json, render_report, ReportConfig, DEFAULT_REPORT_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "pyoutline",
    version,
    about = "Generate a text-based report of the code structure for all Python files in a given folder"
)]
struct Cli {
    /// Path to the root folder
    root_folder: PathBuf,

    /// Name of the report file
    #[arg(long, default_value = DEFAULT_REPORT_FILE)]
    report_file_path: PathBuf,

    /// Path to the ignore file
    #[arg(long)]
    ignore_file_path: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the report to stdout instead of writing the report file
    #[arg(long)]
    stdout: bool,

    /// Parse files in parallel
    #[arg(long)]
    parallel: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Flat human-readable text
    Text,
    /// JSON for machine consumers
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pyoutline=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if !cli.root_folder.is_dir() {
        bail!("{} is not a valid directory", cli.root_folder.display());
    }

    let mut config = ReportConfig::new()
        .with_report_file(&cli.report_file_path)
        .with_parallel(cli.parallel);
    if let Some(ignore_file) = &cli.ignore_file_path {
        config = config.with_ignore_file(ignore_file);
    }

    let entries = pyoutline::outline_tree(&cli.root_folder, &config)?;
    tracing::debug!(files = entries.len(), "outlined python sources");
    let report = match cli.format {
        Format::Text => render_report(&entries),
        Format::Json => render_json(&entries)?,
    };

    if cli.stdout {
        println!("{report}");
    } else {
        std::fs::write(&config.report_file, &report)
            .with_context(|| format!("failed to write {}", config.report_file.display()))?;
        println!(
            "Report generated successfully to {}.",
            config.report_file.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::parse_from(["pyoutline", "some/folder"]);
        assert_eq!(cli.root_folder, PathBuf::from("some/folder"));
        assert_eq!(cli.report_file_path, PathBuf::from("report.txt"));
        assert!(cli.ignore_file_path.is_none());
        assert_eq!(cli.format, Format::Text);
        assert!(!cli.stdout);
        assert!(!cli.parallel);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_parsing_report_file_path() {
        let cli = Cli::parse_from([
            "pyoutline",
            "some/folder",
            "--report-file-path",
            "outline.txt",
        ]);
        assert_eq!(cli.report_file_path, PathBuf::from("outline.txt"));
    }

    #[test]
    fn test_cli_parsing_ignore_file_path() {
        let cli = Cli::parse_from([
            "pyoutline",
            "some/folder",
            "--ignore-file-path",
            ".gitignore",
        ]);
        assert_eq!(cli.ignore_file_path, Some(PathBuf::from(".gitignore")));
    }

    #[test]
    fn test_cli_parsing_format_json() {
        let cli = Cli::parse_from(["pyoutline", "some/folder", "--format", "json"]);
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn test_cli_parsing_flags() {
        let cli = Cli::parse_from(["pyoutline", "some/folder", "--stdout", "--parallel", "--debug"]);
        assert!(cli.stdout);
        assert!(cli.parallel);
        assert!(cli.debug);
    }

    #[test]
    fn test_run_rejects_missing_directory() {
        let cli = Cli::parse_from(["pyoutline", "definitely/not/a/real/folder"]);
        let err = run(cli).expect_err("should reject missing directory");
        assert!(err.to_string().contains("is not a valid directory"));
    }
}
