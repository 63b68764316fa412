//! Spreadsheet workbooks (xlsx, xlsm, xls, xlsb, ods) via calamine.

use std::path::Path;

use bom_model::{CellValue, RawTable, SheetSelector};
use calamine::{DataType, Reader, open_workbook_auto};

use super::table::rows_to_table;
use crate::error::{IngestError, Result};

fn workbook_error(path: &Path, error: impl std::fmt::Display) -> IngestError {
    IngestError::Workbook {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// Lists sheet names in workbook order.
pub fn list_sheets(path: &Path) -> Result<Vec<String>> {
    let workbook = open_workbook_auto(path).map_err(|e| workbook_error(path, e))?;
    Ok(workbook.sheet_names().to_owned())
}

/// Reads one sheet of a workbook.
pub fn read_workbook_table(
    path: &Path,
    sheet: &SheetSelector,
    indicator_rows: usize,
) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(path, e))?;
    let available: Vec<String> = workbook.sheet_names().to_owned();
    let name = resolve_sheet(sheet, &available).ok_or_else(|| IngestError::SheetNotFound {
        path: path.to_path_buf(),
        sheet: sheet.to_string(),
        available: available.clone(),
    })?;
    tracing::debug!(path = %path.display(), sheet = %name, "reading worksheet");

    let range = workbook
        .worksheet_range(&name)
        .ok_or_else(|| IngestError::SheetNotFound {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
            available: available.clone(),
        })?
        .map_err(|e| workbook_error(path, e))?;

    // calamine ranges start at the first used cell; pad leading empty rows
    // so indicator rows and row numbers line up with the sheet.
    let leading_rows = range.start().map_or(0, |(row, _)| row as usize);
    let rows = std::iter::repeat_with(Vec::new)
        .take(leading_rows)
        .chain(range.rows().map(|row| row.iter().map(sheet_cell).collect()));
    rows_to_table(path, rows, indicator_rows)
}

fn resolve_sheet(sheet: &SheetSelector, available: &[String]) -> Option<String> {
    match sheet {
        SheetSelector::Index(idx) => available.get(*idx).cloned(),
        SheetSelector::Name(name) => available.iter().find(|s| *s == name).cloned(),
    }
}

fn sheet_cell(cell: &DataType) -> CellValue {
    match cell {
        DataType::Empty => CellValue::Empty,
        DataType::String(text) => CellValue::Text(text.clone()),
        DataType::Int(value) => CellValue::Number(*value as f64),
        DataType::Float(value) => CellValue::Number(*value),
        DataType::Bool(value) => CellValue::Bool(*value),
        DataType::Error(_) => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}
