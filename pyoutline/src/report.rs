//! Report rendering for file outlines
//!
//! Rendering is a pure function of its input: identical entries always
//! produce byte-identical text, so reports stay diffable and reproducible.
//! Entries render in the order supplied; ordering is the driver's job.

use crate::error::Result;
use crate::types::{ClassMember, ClassNode, FileReport, FunctionNode, ImportNode, TopLevelNode};

/// One indent unit per nesting level
const INDENT: &str = "\t";

/// Render the full text report for an ordered sequence of file entries.
///
/// One section per file, blank line between sections, no trailing newline.
pub fn render_report(entries: &[FileReport]) -> String {
    let sections: Vec<String> = entries.iter().map(render_entry).collect();
    sections.join("\n\n")
}

/// Render the same entries as JSON, for machine consumers
pub fn render_json(entries: &[FileReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

fn render_entry(entry: &FileReport) -> String {
    match entry {
        FileReport::Outline {
            relative_path,
            outline,
        } => {
            let mut lines = vec![format!("- {relative_path}")];
            for node in &outline.nodes {
                render_top_level(node, &mut lines);
            }
            lines.join("\n")
        }
        FileReport::Failed(failure) => {
            format!("- {} ({})", failure.relative_path, failure.message)
        }
    }
}

fn render_top_level(node: &TopLevelNode, lines: &mut Vec<String>) {
    match node {
        TopLevelNode::Import(import) => lines.push(render_import(import)),
        TopLevelNode::Class(class) => render_class(class, lines),
        TopLevelNode::Function(func) => render_function(func, 0, lines),
        TopLevelNode::Var(var) => lines.push(format!("var {}", var.name)),
    }
}

fn render_import(import: &ImportNode) -> String {
    match import {
        ImportNode::Plain { modules } => format!("imports {}", modules.join(", ")),
        ImportNode::From { module, names } => {
            let mut sorted: Vec<&str> = names.iter().map(String::as_str).collect();
            sorted.sort_unstable();
            sorted.dedup();
            format!("from {} imports {}", module, sorted.join(", "))
        }
    }
}

fn render_class(class: &ClassNode, lines: &mut Vec<String>) {
    lines.push(format!("class {}({})", class.name, class.bases.join(", ")));
    for member in &class.members {
        match member {
            ClassMember::Function(func) => render_function(func, 1, lines),
            ClassMember::Var(var) => lines.push(format!("{}var {}", INDENT, var.name)),
        }
    }
}

fn render_function(func: &FunctionNode, depth: usize, lines: &mut Vec<String>) {
    let indent = INDENT.repeat(depth);
    lines.push(format!("{}func {}({})", indent, func.name, func.params.join(", ")));
    for var in &func.locals {
        lines.push(format!("{indent}{INDENT}var {}", var.name));
    }
}
