//! Workbook loader - Excel / ODS sheet → SoilTable

use crate::error::{SoilError, SoilResult};
use crate::types::{CellValue, SoilTable};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sheet row (0-based) holding the column headers; the two rows above it
/// are a free-form title block
pub const HEADER_ROW: u32 = 2;
/// First sheet row with layer data
pub const FIRST_DATA_ROW: u32 = HEADER_ROW + 1;

/// Loads the soil-property table from a workbook
pub struct WorkbookLoader {
    path: PathBuf,
    sheet: Option<String>,
}

impl WorkbookLoader {
    /// Create a loader for an .xlsx / .xls / .ods file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet: None,
        }
    }

    /// Read a named sheet instead of the first one
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    /// Read the sheet into a table
    pub fn load(&self) -> SoilResult<SoilTable> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            SoilError::Workbook(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let sheet_names = workbook.sheet_names().to_vec();
        let sheet_name = match &self.sheet {
            Some(name) if sheet_names.contains(name) => name.clone(),
            Some(name) => {
                return Err(SoilError::Workbook(format!(
                    "Sheet '{}' not found (available: {})",
                    name,
                    sheet_names.join(", ")
                )))
            }
            None => sheet_names
                .first()
                .cloned()
                .ok_or_else(|| SoilError::Workbook("Workbook has no sheets".to_string()))?,
        };

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            SoilError::Workbook(format!("Failed to read sheet '{}': {}", sheet_name, e))
        })?;

        let table = table_from_range(&range);
        debug!(
            sheet = %sheet_name,
            rows = table.row_count(),
            columns = table.width,
            "loaded workbook"
        );
        Ok(table)
    }
}

/// Convert a sheet range to a table.
///
/// Positions are absolute sheet coordinates, so a sheet whose used area
/// starts at C5 still has its label in column A (blank).
fn table_from_range(range: &Range<Data>) -> SoilTable {
    let Some((last_row, last_col)) = range.end() else {
        return SoilTable::default();
    };
    let width = last_col as usize + 1;

    let headers = (0..=last_col)
        .map(|col| match range.get_value((HEADER_ROW, col)) {
            Some(Data::Empty) | None => String::new(),
            Some(cell) => cell.to_string(),
        })
        .collect();

    let mut rows: Vec<Vec<CellValue>> = (FIRST_DATA_ROW..=last_row)
        .map(|row| {
            (0..=last_col)
                .map(|col| convert_cell(range.get_value((row, col))))
                .collect::<Vec<_>>()
        })
        .collect();

    // Interior blank rows keep their index; only the trailing run is dropped
    while rows
        .last()
        .is_some_and(|cells| cells.iter().all(|cell| *cell == CellValue::Empty))
    {
        rows.pop();
    }

    let mut table = SoilTable::from_cells(headers, rows);
    table.width = table.width.max(width);
    table
}

fn convert_cell(cell: Option<&Data>) -> CellValue {
    match cell {
        Some(Data::Float(f)) => CellValue::Number(*f),
        Some(Data::Int(i)) => CellValue::Number(*i as f64),
        Some(Data::String(s)) if s.is_empty() => CellValue::Empty,
        Some(Data::String(s)) => CellValue::Text(s.clone()),
        Some(Data::Bool(b)) => CellValue::Bool(*b),
        Some(Data::Error(_)) | Some(Data::Empty) | None => CellValue::Empty,
        Some(other) => CellValue::Invalid(other.to_string()),
    }
}
