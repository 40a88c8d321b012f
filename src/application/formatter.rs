//! Output formatting for rendered markdown.
//!
//! Supports multiple output formats: ANSI terminal, JSON, and plain text.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{RenderStats, RenderedDocument, Result, Segment, TableGrid};

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// ANSI-styled terminal output.
    #[default]
    Ansi,
    /// JSON format for programmatic use.
    Json,
    /// Plain text with all styling dropped.
    Plain,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ansi" | "term" => Ok(Self::Ansi),
            "json" => Ok(Self::Json),
            "plain" | "text" => Ok(Self::Plain),
            _ => Err(format!("Unknown format: {s}. Use: ansi, json, plain")),
        }
    }
}

/// Formats a rendered document as JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_document_json(document: &RenderedDocument) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(crate::domain::AppError::serialize)
}

/// Formats segments as JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_segments_json(segments: &[Segment]) -> Result<String> {
    serde_json::to_string_pretty(segments).map_err(crate::domain::AppError::serialize)
}

/// Formats table grids as JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_grids_json(grids: &[TableGrid]) -> Result<String> {
    serde_json::to_string_pretty(grids).map_err(crate::domain::AppError::serialize)
}

/// Formats a listing of segments as a table.
#[must_use]
pub fn format_segments_table(segments: &[Segment]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Kind", "Lines", "Preview"]);

    for (i, segment) in segments.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            segment.kind.to_string(),
            segment.body.lines().count().to_string(),
            truncate(&segment.body, 40),
        ]);
    }

    table.to_string()
}

/// Formats rendering statistics for display.
#[must_use]
pub fn format_stats(stats: &RenderStats) -> String {
    format!(
        "{}\n  Segments: {} ({} text, {} code)\n  Lines: {}\n  Bold runs: {}\n  Italic runs: {}\n  Code runs: {}\n  Links: {}\n  Tables: {}",
        "Render statistics".bold(),
        stats.segment_count.to_string().cyan(),
        stats.text_segments.to_string().green(),
        stats.code_segments.to_string().yellow(),
        stats.line_count.to_string().cyan(),
        stats.bold_runs.to_string().cyan(),
        stats.italic_runs.to_string().cyan(),
        stats.monospace_runs.to_string().green(),
        stats.link_runs.to_string().blue(),
        stats.table_count.to_string().yellow()
    )
}

/// Truncates a string to max length with ellipsis, first line only.
/// Counts chars, not bytes: previews hold arbitrary user markdown and
/// must never cut inside a multibyte character.
fn truncate(s: &str, max_len: usize) -> String {
    let s = s.lines().next().unwrap_or(s);
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{cut}...")
    }
}
