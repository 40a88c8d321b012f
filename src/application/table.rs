//! Pipe-table materialization.
//!
//! Turns markdown pipe tables into grids of inline-styled cells. The
//! first grid row is the header row; divider lines are discarded.

use crate::domain::{TableCell, TableGrid};

use super::stylist::{style_inline, StyleOptions};

/// Builds a grid from text believed to contain a pipe table.
///
/// Divider lines (containing `---`) are discarded; remaining lines are
/// split on `|`, cells trimmed, empties dropped, and each surviving
/// cell inline-styled. Rows left without cells are dropped. A table
/// with no divider row still materializes: divider discard is a filter,
/// not a requirement.
#[must_use]
pub fn materialize_table(text: &str, options: &StyleOptions) -> TableGrid {
    let mut rows = Vec::new();

    for line in text.lines() {
        if line.contains("---") {
            continue;
        }
        if !line.contains('|') {
            continue;
        }

        let cells: Vec<TableCell> = line
            .split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(|cell| TableCell {
                runs: style_inline(cell, options),
            })
            .collect();

        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    TableGrid { rows }
}

/// Scans a whole document for pipe-table blocks and materializes each.
///
/// A block is a contiguous run of lines starting with `|`, at least two
/// lines long. Blocks that materialize to an empty grid are skipped.
#[must_use]
pub fn extract_tables(markdown: &str, options: &StyleOptions) -> Vec<TableGrid> {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut grids = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if !lines[i].starts_with('|') {
            i += 1;
            continue;
        }

        let start = i;
        while i < lines.len() && lines[i].starts_with('|') {
            i += 1;
        }

        if i - start >= 2 {
            let block = lines[start..i].join("\n");
            let grid = materialize_table(&block, options);
            if !grid.is_empty() {
                grids.push(grid);
            }
        }
    }

    grids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_texts(grid: &TableGrid) -> Vec<Vec<String>> {
        grid.rows
            .iter()
            .map(|row| row.iter().map(TableCell::plain_text).collect())
            .collect()
    }

    #[test]
    fn test_two_row_table() {
        let grid = materialize_table(
            "| A | B |\n|---|---|\n| 1 | 2 |",
            &StyleOptions::default(),
        );

        assert_eq!(
            cell_texts(&grid),
            vec![vec!["A".to_string(), "B".to_string()], vec!["1".to_string(), "2".to_string()]]
        );
        assert_eq!(grid.header().map(<[TableCell]>::len), Some(2));
        assert_eq!(grid.data_rows().len(), 1);
    }

    #[test]
    fn test_cells_are_inline_styled() {
        let grid = materialize_table(
            "| **Name** | `id` |\n|---|---|\n| x | y |",
            &StyleOptions::default(),
        );

        let header = grid.header().unwrap();
        assert_eq!(header[0].plain_text(), "Name");
        assert!(header[0].runs[0].is_bold());
        assert_eq!(header[1].plain_text(), "id");
    }

    #[test]
    fn test_divider_discarded_and_empty_cells_dropped() {
        let grid = materialize_table("| A || B |\n|---|---|", &StyleOptions::default());
        assert_eq!(cell_texts(&grid), vec![vec!["A".to_string(), "B".to_string()]]);
    }

    #[test]
    fn test_table_without_divider_still_materializes() {
        let grid = materialize_table("| A | B |\n| 1 | 2 |", &StyleOptions::default());
        assert_eq!(grid.rows.len(), 2);
    }

    #[test]
    fn test_malformed_rows_degrade() {
        let grid = materialize_table("garbage line\n|| | |\n| ok |", &StyleOptions::default());
        assert_eq!(cell_texts(&grid), vec![vec!["ok".to_string()]]);
    }

    #[test]
    fn test_extract_tables_finds_blocks() {
        let doc = "intro\n| A |\n|---|\n| 1 |\n\nmiddle\n| X | Y |\n|---|---|\n| 9 | 8 |\nend";
        let grids = extract_tables(doc, &StyleOptions::default());

        assert_eq!(grids.len(), 2);
        assert_eq!(grids[0].rows.len(), 2);
        assert_eq!(grids[1].header().unwrap()[0].plain_text(), "X");
    }

    #[test]
    fn test_extract_tables_ignores_single_pipe_line() {
        let grids = extract_tables("| lonely |\nprose", &StyleOptions::default());
        assert!(grids.is_empty());
    }
}
