//! Document rendering service.
//!
//! Orchestrates segmentation, line styling, and table materialization
//! into an ordered block list plus summary statistics.

use crate::domain::{RenderStats, RenderedBlock, RenderedDocument, SegmentKind, StyleAttr, Theme};

use super::segmenter::segment_markdown;
use super::stylist::{style_text, StyleOptions};
use super::table::extract_tables;

/// Options for document rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Presentation theme (accent color feeds inline code runs).
    pub theme: Theme,
}

/// Renders a whole markdown document into ordered blocks.
///
/// Prose segments are styled line by line; pipe-table blocks inside a
/// prose segment are consumed by the stylist (leaving a blank line) and
/// materialized as separate table blocks following the prose. Fenced
/// code bodies pass through verbatim. Never fails: malformed input
/// degrades to best-effort plain blocks.
#[must_use]
pub fn render_document(markdown: &str, options: &RenderOptions) -> (RenderedDocument, RenderStats) {
    let style_options = StyleOptions::from(&options.theme);
    let segments = segment_markdown(markdown);

    let mut stats = RenderStats {
        segment_count: segments.len(),
        ..RenderStats::default()
    };

    let mut blocks = Vec::new();
    for segment in segments {
        match segment.kind {
            SegmentKind::Code => {
                stats.code_segments += 1;
                blocks.push(RenderedBlock::Code { body: segment.body });
            }
            SegmentKind::Text => {
                stats.text_segments += 1;

                let text = style_text(&segment.body, &style_options);
                stats.line_count += text.lines.len();
                count_runs(&text, &mut stats);
                blocks.push(RenderedBlock::Prose { text });

                for grid in extract_tables(&segment.body, &style_options) {
                    stats.table_count += 1;
                    blocks.push(RenderedBlock::Table { grid });
                }
            }
        }
    }

    tracing::debug!(
        segments = stats.segment_count,
        lines = stats.line_count,
        tables = stats.table_count,
        "Rendered document"
    );

    (RenderedDocument { blocks }, stats)
}

fn count_runs(text: &crate::domain::StyledText, stats: &mut RenderStats) {
    for line in &text.lines {
        for run in &line.runs {
            for attr in &run.attrs {
                match attr {
                    StyleAttr::Bold => stats.bold_runs += 1,
                    StyleAttr::Italic => stats.italic_runs += 1,
                    StyleAttr::Monospace => stats.monospace_runs += 1,
                    StyleAttr::Link(_) => stats.link_runs += 1,
                    StyleAttr::Color(_) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_document() {
        let doc = "# Hello\nSome **bold** text.\n```rust\nlet x = 1;\n```\nBye.";
        let (rendered, stats) = render_document(doc, &RenderOptions::default());

        assert_eq!(rendered.blocks.len(), 3);
        assert!(matches!(rendered.blocks[1], RenderedBlock::Code { .. }));
        assert_eq!(stats.segment_count, 3);
        assert_eq!(stats.code_segments, 1);
        assert_eq!(stats.text_segments, 2);
        // Header bold plus inline bold.
        assert_eq!(stats.bold_runs, 2);
    }

    #[test]
    fn test_table_becomes_own_block() {
        let doc = "Data:\n| A | B |\n|---|---|\n| 1 | 2 |";
        let (rendered, stats) = render_document(doc, &RenderOptions::default());

        assert_eq!(stats.table_count, 1);
        let grids: Vec<_> = rendered
            .blocks
            .iter()
            .filter(|b| matches!(b, RenderedBlock::Table { .. }))
            .collect();
        assert_eq!(grids.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let (rendered, stats) = render_document("", &RenderOptions::default());
        assert!(rendered.blocks.is_empty());
        assert_eq!(stats.segment_count, 0);
    }

    #[test]
    fn test_plain_text_of_document() {
        let doc = "# Title\n```\ncode body\n```";
        let (rendered, _) = render_document(doc, &RenderOptions::default());
        assert_eq!(rendered.plain_text(), "Title\n\ncode body");
    }
}
