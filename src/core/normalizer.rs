//! Cell value normalization for the output files

use crate::types::CellValue;
use std::fmt;

/// A cell value ready to be written to an output file
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Number rounded to 2 decimal places
    Number(f64),
    /// Text passed through unchanged
    Text(String),
    /// Missing or unreadable value, written as `0`
    Zero,
}

/// Normalize a cell: numbers are rounded to 2 decimals, text passes through,
/// everything else becomes zero.
pub fn normalize(cell: &CellValue) -> Normalized {
    match cell {
        CellValue::Number(n) => round2(*n).map_or(Normalized::Zero, Normalized::Number),
        CellValue::Bool(b) => Normalized::Number(if *b { 1.0 } else { 0.0 }),
        CellValue::Text(s) => Normalized::Text(s.clone()),
        CellValue::Empty | CellValue::Invalid(_) => Normalized::Zero,
    }
}

/// Round to 2 decimal places, ties to even on the exact binary value.
///
/// Goes through the decimal formatter rather than `(x * 100).round() / 100`
/// so that values such as 1.005 (stored as 1.00499...) round down.
fn round2(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    format!("{:.2}", value).parse().ok()
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalized::Number(n) if n.fract() == 0.0 && n.abs() < 1e16 => write!(f, "{:.1}", n),
            Normalized::Number(n) => write!(f, "{}", n),
            Normalized::Text(s) => f.write_str(s),
            Normalized::Zero => f.write_str("0"),
        }
    }
}
