//! `.sba` wall-data emitter
//!
//! Layout: the number of selected rows, then the values of columns AS..AY
//! written column by column (all rows of AS, then all rows of AT, ...).
//! The consuming application reads the file in that order.

use crate::core::columns::wall_window;
use crate::core::normalizer::{normalize, Normalized};
use crate::types::Row;

/// Wall-data text for the selected rows.
///
/// Only the part of the AS:AY window that exists in a table of `width`
/// columns is written. Returns `None` when none of it exists.
pub fn render_wall_data(rows: &[&Row], width: usize) -> Option<String> {
    let window = wall_window(width);
    if window.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(1 + window.len() * rows.len());
    lines.push(rows.len().to_string());
    for column in window {
        for row in rows {
            // Rows are padded to the table width, so the cell is present
            let value = row.cell(column).map_or(Normalized::Zero, normalize);
            lines.push(value.to_string());
        }
    }
    Some(lines.join("\n"))
}
