//! Spreadsheet import for soil-property workbooks

mod importer;

pub use importer::{WorkbookLoader, FIRST_DATA_ROW, HEADER_ROW};
