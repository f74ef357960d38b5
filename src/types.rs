use std::fmt;

//==============================================================================
// Cells and rows
//==============================================================================

/// A single spreadsheet cell as read from the workbook
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Blank cell (also used for spreadsheet error cells such as `#N/A`)
    Empty,
    /// Numeric cell (integers are widened to f64)
    Number(f64),
    /// Non-empty text
    Text(String),
    /// Boolean cell
    Bool(bool),
    /// Cell that cannot be read as a number, e.g. a date. Keeps its raw text.
    Invalid(String),
}

impl CellValue {
    /// True for blank cells and NaN numbers
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(n) => n.is_nan(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            // Labels become material identifiers: integral numbers print as "3"
            // (never "3.0") and booleans as "TRUE"/"FALSE", the way the sheet shows them
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) | CellValue::Invalid(s) => f.write_str(s),
            CellValue::Bool(true) => f.write_str("TRUE"),
            CellValue::Bool(false) => f.write_str("FALSE"),
        }
    }
}

/// One soil layer record
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 0-based position among the data rows of the source table
    pub index: usize,
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(index: usize, cells: Vec<CellValue>) -> Self {
        Self { index, cells }
    }

    /// User-visible layer label: the first cell, or `Row_<index>` when blank
    pub fn label(&self) -> String {
        match self.cells.first() {
            Some(cell) if !cell.is_missing() => cell.to_string(),
            _ => format!("Row_{}", self.index),
        }
    }

    /// Cell at a column position, `None` past the end of the row
    pub fn cell(&self, column: usize) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

/// The soil-property table (data rows only, header block already skipped)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoilTable {
    /// Header texts, one per column (may be empty strings)
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    /// Number of columns in the table
    pub width: usize,
}

impl SoilTable {
    /// Build a table from raw cell rows; the width is the longest row
    pub fn from_cells(headers: Vec<String>, cells: Vec<Vec<CellValue>>) -> Self {
        let width = cells
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);
        let rows = cells
            .into_iter()
            .enumerate()
            .map(|(index, mut row)| {
                row.resize(width, CellValue::Empty);
                Row::new(index, row)
            })
            .collect();
        Self {
            headers,
            rows,
            width,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Layer labels in table order
    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().map(Row::label).collect()
    }
}

//==============================================================================
// Generation options
//==============================================================================

/// Confidence level that picks the φ / c / γ_unsat source columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfidenceLevel {
    /// "0.85"
    #[default]
    P085,
    /// "0.95"
    P095,
}

impl ConfidenceLevel {
    /// "0.85" selects P085; every other selector falls back to P095
    pub fn from_selector(selector: &str) -> Self {
        if selector.trim() == "0.85" {
            ConfidenceLevel::P085
        } else {
            ConfidenceLevel::P095
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::P085 => "0.85",
            ConfidenceLevel::P095 => "0.95",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional material variants emitted after each base block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariantFlags {
    pub interface: bool,
    pub three_e: bool,
    pub five_e: bool,
}

impl VariantFlags {
    pub fn new(interface: bool, three_e: bool, five_e: bool) -> Self {
        Self {
            interface,
            three_e,
            five_e,
        }
    }

    /// Number of enabled variants (0..=3)
    pub fn enabled_count(&self) -> usize {
        [self.interface, self.three_e, self.five_e]
            .iter()
            .filter(|flag| **flag)
            .count()
    }

    /// Palette size for one row: the base colour plus one per variant
    pub fn palette_len(&self) -> usize {
        1 + self.enabled_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_first_cell() {
        let row = Row::new(4, vec![CellValue::Text("ИГЭ-2".to_string())]);
        assert_eq!(row.label(), "ИГЭ-2");
    }

    #[test]
    fn test_label_integral_number_has_no_fraction() {
        let row = Row::new(0, vec![CellValue::Number(3.0)]);
        assert_eq!(row.label(), "3");
        let row = Row::new(0, vec![CellValue::Number(2.5)]);
        assert_eq!(row.label(), "2.5");
    }

    #[test]
    fn test_label_fallback_for_blank_cell() {
        assert_eq!(Row::new(7, vec![CellValue::Empty]).label(), "Row_7");
        assert_eq!(Row::new(2, vec![CellValue::Number(f64::NAN)]).label(), "Row_2");
        assert_eq!(Row::new(1, vec![]).label(), "Row_1");
    }

    #[test]
    fn test_from_cells_pads_short_rows() {
        let table = SoilTable::from_cells(
            vec!["a".to_string()],
            vec![
                vec![CellValue::Number(1.0), CellValue::Number(2.0)],
                vec![CellValue::Number(3.0)],
            ],
        );
        assert_eq!(table.width, 2);
        assert_eq!(table.rows[1].cells, vec![CellValue::Number(3.0), CellValue::Empty]);
        assert_eq!(table.rows[1].index, 1);
    }

    #[test]
    fn test_confidence_selector() {
        assert_eq!(ConfidenceLevel::from_selector("0.85"), ConfidenceLevel::P085);
        assert_eq!(ConfidenceLevel::from_selector("0.95"), ConfidenceLevel::P095);
        assert_eq!(ConfidenceLevel::from_selector("0.9"), ConfidenceLevel::P095);
        assert_eq!(ConfidenceLevel::P095.to_string(), "0.95");
    }

    #[test]
    fn test_palette_len_follows_flags() {
        assert_eq!(VariantFlags::default().palette_len(), 1);
        assert_eq!(VariantFlags::new(true, false, true).palette_len(), 3);
        assert_eq!(VariantFlags::new(true, true, true).palette_len(), 4);
    }
}
