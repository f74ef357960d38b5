//! Workbook loading tests against real .xlsx files

use rust_xlsxwriter::{Workbook, Worksheet};
use soilgen::excel::WorkbookLoader;
use soilgen::types::CellValue;
use soilgen::SoilError;
use std::path::Path;
use tempfile::TempDir;

fn title_block(sheet: &mut Worksheet) {
    sheet.write_string(0, 0, "Нормативные и расчётные характеристики грунтов").unwrap();
    sheet.write_string(1, 0, "Объект: test").unwrap();
}

fn save(workbook: &mut Workbook, path: &Path) {
    workbook.save(path).unwrap();
}

#[test]
fn test_load_first_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("soils.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    title_block(sheet);
    sheet.write_string(2, 0, "ИГЭ").unwrap();
    sheet.write_string(2, 1, "phi").unwrap();
    sheet.write_string(3, 0, "1a").unwrap();
    sheet.write_number(3, 1, 28.456).unwrap();
    sheet.write_number(4, 0, 2).unwrap();
    sheet.write_string(4, 1, "н/д").unwrap();
    sheet.write_boolean(5, 0, true).unwrap();
    save(&mut workbook, &path);

    let table = WorkbookLoader::new(&path).load().unwrap();
    assert_eq!(table.headers, vec!["ИГЭ", "phi"]);
    assert_eq!(table.width, 2);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.labels(), vec!["1a", "2", "TRUE"]);
    assert_eq!(table.rows[0].cells[1], CellValue::Number(28.456));
    assert_eq!(table.rows[1].cells[1], CellValue::Text("н/д".to_string()));
    assert_eq!(table.rows[2].cells[1], CellValue::Empty);
}

#[test]
fn test_load_named_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("soils.xlsx");

    let mut workbook = Workbook::new();
    let first = workbook.add_worksheet();
    first.set_name("Notes").unwrap();
    first.write_string(0, 0, "nothing here").unwrap();
    let second = workbook.add_worksheet();
    second.set_name("Soils").unwrap();
    title_block(second);
    second.write_string(3, 0, "L1").unwrap();
    save(&mut workbook, &path);

    let table = WorkbookLoader::new(&path)
        .with_sheet(Some("Soils".to_string()))
        .load()
        .unwrap();
    assert_eq!(table.labels(), vec!["L1"]);

    let notes = WorkbookLoader::new(&path).load().unwrap();
    assert!(notes.is_empty());
}

#[test]
fn test_unknown_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("soils.xlsx");
    let mut workbook = Workbook::new();
    workbook.add_worksheet().write_string(3, 0, "L1").unwrap();
    save(&mut workbook, &path);

    let err = WorkbookLoader::new(&path)
        .with_sheet(Some("Walls".to_string()))
        .load()
        .unwrap_err();
    assert!(matches!(err, SoilError::Workbook(_)));
    assert!(err.to_string().contains("Walls"));
}

#[test]
fn test_columns_keep_sheet_positions() {
    // Nothing in columns A..C of the data rows; the table still starts at A
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("offset.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_number(3, 3, 4.5).unwrap();
    sheet.write_number(3, 50, 7.25).unwrap();
    save(&mut workbook, &path);

    let table = WorkbookLoader::new(&path).load().unwrap();
    assert_eq!(table.width, 51);
    assert_eq!(table.rows[0].cells[0], CellValue::Empty);
    assert_eq!(table.rows[0].label(), "Row_0");
    assert_eq!(table.rows[0].cells[3], CellValue::Number(4.5));
    assert_eq!(table.rows[0].cells[50], CellValue::Number(7.25));
}

#[test]
fn test_blank_row_keeps_later_indices() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("gap.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    title_block(sheet);
    sheet.write_string(2, 0, "ИГЭ").unwrap();
    sheet.write_string(3, 0, "A").unwrap();
    sheet.write_number(5, 1, 19.5).unwrap();
    save(&mut workbook, &path);

    let table = WorkbookLoader::new(&path).load().unwrap();
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.labels(), vec!["A", "Row_1", "Row_2"]);
    assert!(table.rows[1].cells.iter().all(|cell| *cell == CellValue::Empty));
    assert_eq!(table.rows[2].index, 2);
    assert_eq!(table.rows[2].cells[1], CellValue::Number(19.5));
}

#[test]
fn test_not_a_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("soils.xlsx");
    std::fs::write(&path, "not a zip archive").unwrap();
    let err = WorkbookLoader::new(&path).load().unwrap_err();
    assert!(matches!(err, SoilError::Workbook(_)));
}
