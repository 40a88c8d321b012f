//! ANSI terminal presentation.
//!
//! Adapts styled runs and table grids to terminal escape sequences via
//! `colored` and `comfy-table`. Purely a presentation adapter; all
//! styling decisions were already made by the application layer.

use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, Table};

use crate::domain::{
    RenderedBlock, RenderedDocument, StyleAttr, StyledLine, StyledRun, StyledText, TableGrid,
    Theme,
};

/// Fallback accent when both a run color and the theme accent are malformed.
const FALLBACK_ACCENT: (u8, u8, u8) = (0x4C, 0xAF, 0x50);

/// Renders a whole document for the terminal, blocks separated by
/// blank lines.
#[must_use]
pub fn render_document_ansi(document: &RenderedDocument, theme: &Theme) -> String {
    let parts: Vec<String> = document
        .blocks
        .iter()
        .map(|block| match block {
            RenderedBlock::Prose { text } => render_text(text, theme),
            RenderedBlock::Code { body } => render_code_block(body),
            RenderedBlock::Table { grid } => render_grid(grid, theme),
        })
        .collect();

    parts.join("\n\n")
}

/// Renders styled prose lines.
#[must_use]
pub fn render_text(text: &StyledText, theme: &Theme) -> String {
    text.lines
        .iter()
        .map(|line| render_line(line, theme))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one styled line, prefixing the theme bullet marker on
/// bullet items.
#[must_use]
pub fn render_line(line: &StyledLine, theme: &Theme) -> String {
    let body: String = line.runs.iter().map(|run| render_run(run, theme)).collect();

    if line.bullet {
        format!("{}{}", theme.bullet_marker, body)
    } else {
        body
    }
}

/// Renders a fenced-code body as an indented dimmed block.
#[must_use]
pub fn render_code_block(body: &str) -> String {
    body.lines()
        .map(|l| format!("    {}", l.dimmed()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a grid with a visually distinguished header row.
#[must_use]
pub fn render_grid(grid: &TableGrid, theme: &Theme) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let (hr, hg, hb) = parse_hex(&theme.table_header_color).unwrap_or(FALLBACK_ACCENT);

    if let Some(header) = grid.header() {
        table.set_header(
            header
                .iter()
                .map(|cell| {
                    Cell::new(cell.plain_text())
                        .add_attribute(Attribute::Bold)
                        .fg(Color::Rgb {
                            r: hr,
                            g: hg,
                            b: hb,
                        })
                })
                .collect::<Vec<_>>(),
        );
    }

    for row in grid.data_rows() {
        table.add_row(row.iter().map(|c| c.plain_text()).collect::<Vec<_>>());
    }

    table.to_string()
}

fn render_run(run: &StyledRun, theme: &Theme) -> String {
    let mut styled: ColoredString = run.text.as_str().normal();

    for attr in &run.attrs {
        styled = match attr {
            StyleAttr::Bold => styled.bold(),
            StyleAttr::Italic => styled.italic(),
            // Terminals are monospace already; the accent color carries
            // the visual distinction.
            StyleAttr::Monospace => styled,
            StyleAttr::Color(hex) => {
                let (r, g, b) = parse_hex(hex)
                    .or_else(|| parse_hex(&theme.accent_color))
                    .unwrap_or(FALLBACK_ACCENT);
                styled.truecolor(r, g, b)
            }
            StyleAttr::Link(_) => styled.blue().underline(),
        };
    }

    styled.to_string()
}

/// Parses `#RRGGBB` into components. Malformed input yields `None`
/// rather than an error; callers fall back to defaults.
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
