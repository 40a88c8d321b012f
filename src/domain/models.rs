//! Domain models for markdown rendering.
//!
//! These types describe the output of the renderer: segments split on
//! fenced code blocks, styled runs of text, and materialized tables.
//! All of them are transient rendering output; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Kind of a markdown segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Prose text (may contain inline markup, lists, tables).
    Text,
    /// Body of a fenced code block (fence markers and language tag removed).
    Code,
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Code => write!(f, "code"),
        }
    }
}

/// A contiguous span of input classified as code or prose.
///
/// Produced by splitting raw markdown on triple-backtick fences.
/// Ordering is preserved; segments are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Whether this segment is prose or fenced code.
    pub kind: SegmentKind,
    /// The segment body, trimmed.
    pub body: String,
}

impl Segment {
    /// Create a prose segment.
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Text,
            body: body.into(),
        }
    }

    /// Create a code segment.
    #[must_use]
    pub fn code(body: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Code,
            body: body.into(),
        }
    }

    /// Whether this segment holds fenced code.
    #[must_use]
    pub const fn is_code(&self) -> bool {
        matches!(self.kind, SegmentKind::Code)
    }
}

/// A single presentation attribute attached to a styled run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleAttr {
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
    /// Monospace typeface (inline code).
    Monospace,
    /// Foreground color as a `#RRGGBB` hex string.
    Color(String),
    /// Link target URL; the run text is the link label.
    Link(String),
}

/// A contiguous text range with zero or more style attributes.
///
/// Markers (`**`, `*`, backticks, link syntax) are stripped before the
/// run is created; run text never contains markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    /// The rendered text of the run.
    pub text: String,
    /// Attributes applying to the whole run.
    #[serde(default)]
    pub attrs: Vec<StyleAttr>,
}

impl StyledRun {
    /// An unstyled run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attrs: Vec::new(),
        }
    }

    /// A run with the given attributes.
    #[must_use]
    pub fn styled(text: impl Into<String>, attrs: Vec<StyleAttr>) -> Self {
        Self {
            text: text.into(),
            attrs,
        }
    }

    /// Whether the run carries the given attribute.
    #[must_use]
    pub fn has(&self, attr: &StyleAttr) -> bool {
        self.attrs.contains(attr)
    }

    /// Whether the run carries a bold attribute.
    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.has(&StyleAttr::Bold)
    }

    /// The link target, if the run is a link.
    #[must_use]
    pub fn link_target(&self) -> Option<&str> {
        self.attrs.iter().find_map(|a| match a {
            StyleAttr::Link(url) => Some(url.as_str()),
            _ => None,
        })
    }
}

/// One rendered line: ordered runs plus a line-level bullet flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledLine {
    /// Runs in display order.
    pub runs: Vec<StyledRun>,
    /// Whether the line is a bullet list item.
    #[serde(default)]
    pub bullet: bool,
}

impl StyledLine {
    /// A blank line.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Concatenated run text without styling.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Whether the line has no visible text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

/// A styled rendering of a text segment, one line per input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    /// Lines in original order.
    pub lines: Vec<StyledLine>,
}

impl StyledText {
    /// Newline-joined plain text of all lines.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(StyledLine::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One cell of a materialized table: an inline-styled run sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Runs in display order.
    pub runs: Vec<StyledRun>,
}

impl TableCell {
    /// Concatenated run text without styling.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A grid of styled cells built from a pipe table.
///
/// The first row is the header row; the presentation layer distinguishes
/// it visually.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGrid {
    /// Rows of cells, header first.
    pub rows: Vec<Vec<TableCell>>,
}

impl TableGrid {
    /// The header row, if the grid is non-empty.
    #[must_use]
    pub fn header(&self) -> Option<&[TableCell]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Data rows (everything after the header).
    #[must_use]
    pub fn data_rows(&self) -> &[Vec<TableCell>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// Whether the grid contains no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One rendered block of a document: prose, fenced code, or a table
/// materialized from within the prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderedBlock {
    /// Styled prose lines.
    Prose { text: StyledText },
    /// Verbatim fenced-code body.
    Code { body: String },
    /// A pipe table materialized into a grid.
    Table { grid: TableGrid },
}

/// Ordered rendered blocks for a whole markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Blocks in display order.
    pub blocks: Vec<RenderedBlock>,
}

impl RenderedDocument {
    /// Plain-text rendering of the whole document, blocks separated by
    /// blank lines. Table rows flatten to cell text joined by two spaces.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let parts: Vec<String> = self
            .blocks
            .iter()
            .map(|block| match block {
                RenderedBlock::Prose { text } => text.plain_text(),
                RenderedBlock::Code { body } => body.clone(),
                RenderedBlock::Table { grid } => grid
                    .rows
                    .iter()
                    .map(|row| {
                        row.iter()
                            .map(TableCell::plain_text)
                            .collect::<Vec<_>>()
                            .join("  ")
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            })
            .collect();

        parts.join("\n\n")
    }
}

/// Summary statistics for a rendered document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderStats {
    /// Total segments after fence splitting.
    pub segment_count: usize,
    /// Fenced code segments.
    pub code_segments: usize,
    /// Prose segments.
    pub text_segments: usize,
    /// Rendered prose lines.
    pub line_count: usize,
    /// Runs carrying a bold attribute.
    pub bold_runs: usize,
    /// Runs carrying an italic attribute.
    pub italic_runs: usize,
    /// Runs carrying a monospace attribute.
    pub monospace_runs: usize,
    /// Runs carrying a link target.
    pub link_runs: usize,
    /// Pipe tables materialized.
    pub table_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_kind_display() {
        assert_eq!(SegmentKind::Text.to_string(), "text");
        assert_eq!(SegmentKind::Code.to_string(), "code");
        assert!(Segment::code("x").is_code());
        assert!(!Segment::text("x").is_code());
    }

    #[test]
    fn test_styled_run_helpers() {
        let run = StyledRun::styled(
            "docs",
            vec![StyleAttr::Bold, StyleAttr::Link("https://example.com".into())],
        );
        assert!(run.is_bold());
        assert_eq!(run.link_target(), Some("https://example.com"));
        assert!(StyledRun::plain("x").link_target().is_none());
    }

    #[test]
    fn test_styled_text_plain_text() {
        let text = StyledText {
            lines: vec![
                StyledLine {
                    runs: vec![StyledRun::plain("hello "), StyledRun::plain("world")],
                    bullet: false,
                },
                StyledLine::blank(),
            ],
        };
        assert_eq!(text.plain_text(), "hello world\n");
    }

    #[test]
    fn test_table_grid_rows() {
        let grid = TableGrid {
            rows: vec![
                vec![TableCell {
                    runs: vec![StyledRun::plain("A")],
                }],
                vec![TableCell {
                    runs: vec![StyledRun::plain("1")],
                }],
            ],
        };
        assert_eq!(grid.header().map(<[TableCell]>::len), Some(1));
        assert_eq!(grid.data_rows().len(), 1);
        assert!(TableGrid::default().header().is_none());
        assert!(TableGrid::default().data_rows().is_empty());
    }
}
