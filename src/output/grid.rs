//! Pandoc-style grid-table rendering.
//!
//! Converts a [`Table`]'s header, rows and precomputed column widths into an
//! aligned text grid:
//!
//! ```text
//! +----+--------+
//! |name|surname |
//! +====+========+
//! |john|travolta|
//! +----+--------+
//! ```
//!
//! Rendering is a pure formatting pass: all width computation already
//! happened incrementally in the table store.

use crate::table::Table;

/// Build a horizontal rule: `+` bordered, one run of `fill` per column.
fn rule(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push('+');
        }
        line.extend(std::iter::repeat(fill).take(*width));
    }
    line.push('+');
    line
}

/// Build a content line: cells left-aligned, right-padded to their column
/// width, joined and bordered by `|`.
fn content_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        // Pad by character count; format! width counts chars for str.
        line.push_str(&format!("{:<width$}", cell, width = width));
        line.push('|');
    }
    line
}

/// Render a table as a Pandoc grid table.
///
/// A table with no content at all (column count still undetermined) renders
/// as the empty string rather than a degenerate `++` rule.
pub fn render_grid(table: &Table) -> String {
    if table.column_count() == 0 {
        return String::new();
    }

    let widths = table.column_widths();
    let mut lines = Vec::with_capacity(2 * table.row_count() + 3);

    lines.push(rule(widths, '-'));

    if table.has_header() {
        lines.push(content_line(table.header(), widths));
        lines.push(rule(widths, '='));
    }

    for row in table.rows() {
        lines.push(content_line(row, widths));
        lines.push(rule(widths, '-'));
    }

    format!("{}\n", lines.join("\n"))
}
