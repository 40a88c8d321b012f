//! Line classification and inline styling.
//!
//! Turns a prose segment into styled lines. Each line is classified
//! (table block, header, ordered item, bullet item, plain) and its
//! inline markup is converted to styled runs by a single left-to-right
//! lexer pass. Markers are consumed during the pass, so re-styling
//! already-rendered plain text is a no-op.

use crate::domain::{StyleAttr, StyledLine, StyledRun, StyledText, Theme};

/// Options for inline styling.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Accent color attached to inline code runs, as `#RRGGBB`.
    pub accent_color: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            accent_color: Theme::default().accent_color,
        }
    }
}

impl From<&Theme> for StyleOptions {
    fn from(theme: &Theme) -> Self {
        Self {
            accent_color: theme.accent_color.clone(),
        }
    }
}

/// Styles a prose segment, one styled line per input line.
///
/// Classification priority per line: pipe-table block, header (1-4 `#`),
/// ordered list item, bullet item, plain. A table block (a `|` line whose
/// successor contains `---`) is consumed wholesale and replaced by one
/// blank line; the grid itself comes from the table materializer.
#[must_use]
pub fn style_text(body: &str, options: &StyleOptions) -> StyledText {
    let lines: Vec<&str> = body.split('\n').collect();
    let mut out = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if is_table_start(&lines, i) {
            while i < lines.len() && is_table_line(lines[i]) {
                i += 1;
            }
            out.push(StyledLine::blank());
            continue;
        }

        out.push(classify_line(line, options));
        i += 1;
    }

    StyledText { lines: out }
}

/// Styles a single line according to its classification.
fn classify_line(line: &str, options: &StyleOptions) -> StyledLine {
    if let Some(text) = strip_header_marker(line) {
        // Headers get a whole-line bold run; no inline styling inside.
        return StyledLine {
            runs: vec![StyledRun::styled(text, vec![StyleAttr::Bold])],
            bullet: false,
        };
    }

    if let Some(content) = strip_ordered_marker(line) {
        return StyledLine {
            runs: style_inline(content, options),
            bullet: false,
        };
    }

    if let Some(content) = line.strip_prefix("* ") {
        return StyledLine {
            runs: style_inline(content.trim(), options),
            bullet: true,
        };
    }

    StyledLine {
        runs: style_inline(line, options),
        bullet: false,
    }
}

/// Whether line `i` opens a pipe-table block: a `|` line whose successor
/// is a divider. A `|` line with no divider following is treated as a
/// plain line.
fn is_table_start(lines: &[&str], i: usize) -> bool {
    lines[i].starts_with('|') && lines.get(i + 1).is_some_and(|next| next.contains("---"))
}

/// Whether a line belongs to an already-opened table block.
fn is_table_line(line: &str) -> bool {
    line.starts_with('|') || (line.contains("---") && line.contains('|'))
}

/// Strips a 1-4 level header marker, returning the trimmed title.
fn strip_header_marker(line: &str) -> Option<&str> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if (1..=4).contains(&hashes) && line.as_bytes().get(hashes) == Some(&b' ') {
        Some(line[hashes + 1..].trim())
    } else {
        None
    }
}

/// Strips an ordered-list marker (`<digits>. `), returning the content.
fn strip_ordered_marker(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Converts inline markup to styled runs in a single left-to-right pass.
///
/// `**…**` becomes bold, `*…*` italic, `` `…` `` monospace with the
/// accent color, `[label](url)` the label with a link target. Markers
/// are consumed; an unterminated marker passes through literally.
/// Nested markers are unsupported: the first matching closer wins and
/// span content is taken literally.
#[must_use]
pub fn style_inline(text: &str, options: &StyleOptions) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];

        if let Some(consumed) = match_span(rest, &mut runs, &mut plain, options) {
            i += consumed;
            continue;
        }

        // No marker here: accumulate one char of plain text.
        if let Some(c) = rest.chars().next() {
            plain.push(c);
            i += c.len_utf8();
        } else {
            break;
        }
    }

    flush_plain(&mut runs, &mut plain);
    runs
}

/// Tries to lex a styled span at the start of `rest`. On success the
/// pending plain text is flushed, a run is emitted, and the consumed
/// byte count is returned.
fn match_span(
    rest: &str,
    runs: &mut Vec<StyledRun>,
    plain: &mut String,
    options: &StyleOptions,
) -> Option<usize> {
    if let Some(inner) = rest.strip_prefix("**") {
        let end = inner.find("**")?;
        flush_plain(runs, plain);
        emit(runs, &inner[..end], vec![StyleAttr::Bold]);
        return Some(2 + end + 2);
    }

    if let Some(inner) = rest.strip_prefix('*') {
        let end = inner.find('*')?;
        flush_plain(runs, plain);
        emit(runs, &inner[..end], vec![StyleAttr::Italic]);
        return Some(1 + end + 1);
    }

    if let Some(inner) = rest.strip_prefix('`') {
        let end = inner.find('`')?;
        flush_plain(runs, plain);
        emit(
            runs,
            &inner[..end],
            vec![
                StyleAttr::Monospace,
                StyleAttr::Color(options.accent_color.clone()),
            ],
        );
        return Some(1 + end + 1);
    }

    if let Some(inner) = rest.strip_prefix('[') {
        let label_end = inner.find("](")?;
        let after_label = &inner[label_end + 2..];
        let url_end = after_label.find(')')?;
        flush_plain(runs, plain);
        emit(
            runs,
            &inner[..label_end],
            vec![StyleAttr::Link(after_label[..url_end].to_string())],
        );
        return Some(1 + label_end + 2 + url_end + 1);
    }

    None
}

fn emit(runs: &mut Vec<StyledRun>, text: &str, attrs: Vec<StyleAttr>) {
    if !text.is_empty() {
        runs.push(StyledRun::styled(text, attrs));
    }
}

fn flush_plain(runs: &mut Vec<StyledRun>, plain: &mut String) {
    if !plain.is_empty() {
        runs.push(StyledRun::plain(std::mem::take(plain)));
    }
}
