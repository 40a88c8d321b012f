//! Fence segmentation.
//!
//! Splits raw markdown on triple-backtick code fences, producing an
//! ordered list of prose and code segments. A single left-to-right scan;
//! no regex and no re-matching.

use crate::domain::Segment;

const FENCE: &str = "```";

/// Splits markdown into ordered prose/code segments.
///
/// Text before, between, and after fences becomes trimmed `text`
/// segments (empties dropped); fence bodies become `code` segments with
/// the optional language tag discarded. An opening fence without a
/// closing one degrades gracefully: the remainder, fence included, is
/// kept as trailing prose. Never fails.
#[must_use]
pub fn segment_markdown(markdown: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    while let Some(rel) = markdown[last..].find(FENCE) {
        let open = last + rel;
        let body_start = skip_fence_header(markdown, open + FENCE.len());

        let Some(close_rel) = markdown[body_start..].find(FENCE) else {
            // Unbalanced fence: keep the rest as prose, fence included.
            break;
        };
        let close = body_start + close_rel;

        let before = markdown[last..open].trim();
        if !before.is_empty() {
            segments.push(Segment::text(before));
        }

        segments.push(Segment::code(markdown[body_start..close].trim()));
        last = close + FENCE.len();
    }

    let after = markdown[last..].trim();
    if !after.is_empty() {
        segments.push(Segment::text(after));
    }

    segments
}

/// Advances past the optional language tag and following whitespace on
/// an opening fence, returning the byte offset where the body starts.
fn skip_fence_header(markdown: &str, mut pos: usize) -> usize {
    let tag = &markdown[pos..];
    let tag_len = tag
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(tag.len());
    pos += tag_len;

    let ws = &markdown[pos..];
    let ws_len = ws
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(ws.len());
    pos + ws_len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SegmentKind;

    #[test]
    fn test_text_code_text() {
        let input = "Intro.\n```rust\nfn main() {}\n```\nOutro.";
        let segments = segment_markdown(input);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::text("Intro."));
        assert_eq!(segments[1], Segment::code("fn main() {}"));
        assert_eq!(segments[2], Segment::text("Outro."));
    }

    #[test]
    fn test_language_tag_discarded() {
        let segments = segment_markdown("```python\nprint(1)\n```");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Code);
        assert_eq!(segments[0].body, "print(1)");
    }

    #[test]
    fn test_no_fences() {
        let segments = segment_markdown("just prose, nothing else");
        assert_eq!(segments, vec![Segment::text("just prose, nothing else")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment_markdown("").is_empty());
        assert!(segment_markdown("   \n  ").is_empty());
    }

    #[test]
    fn test_multiple_fences_preserve_order() {
        let input = "a\n```\none\n```\nb\n```\ntwo\n```\nc";
        let segments = segment_markdown(input);
        let kinds: Vec<_> = segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Text,
                SegmentKind::Code,
                SegmentKind::Text,
                SegmentKind::Code,
                SegmentKind::Text,
            ]
        );
        assert_eq!(segments[1].body, "one");
        assert_eq!(segments[3].body, "two");
    }

    #[test]
    fn test_unbalanced_fence_degrades_to_text() {
        let input = "before\n```rust\nfn broken(";
        let segments = segment_markdown(input);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Text);
        assert!(segments[0].body.contains("```rust"));
        assert!(segments[0].body.starts_with("before"));
    }

    #[test]
    fn test_adjacent_fences() {
        let segments = segment_markdown("```\na\n``````\nb\n```");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].body, "a");
        assert_eq!(segments[1].body, "b");
    }

    #[test]
    fn test_empty_code_block_kept() {
        let segments = segment_markdown("x\n```\n```\ny");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1], Segment::code(""));
    }
}
