//! Delimited text (CSV) sources.

use std::io::Read;
use std::path::Path;

use bom_model::{CellValue, RawTable};

use super::table::rows_to_table;
use crate::error::{IngestError, Result};

const UTF8_BOM: char = '\u{feff}';

/// Reads a CSV BOM file.
pub fn read_csv_table(path: &Path, indicator_rows: usize) -> Result<RawTable> {
    let file = std::fs::File::open(path).map_err(|e| super::file::io_error(path, e))?;
    read_csv_from_reader(path, file, indicator_rows)
}

/// Reads CSV from any reader. `path` is only used in errors.
pub fn read_csv_from_reader<R: Read>(
    path: &Path,
    reader: R,
    indicator_rows: usize,
) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut cells: Vec<CellValue> = record.iter().map(csv_cell).collect();
        if rows.is_empty()
            && let Some(CellValue::Text(first)) = cells.first_mut()
            && first.starts_with(UTF8_BOM)
        {
            *first = first.trim_start_matches(UTF8_BOM).to_string();
        }
        rows.push(cells);
    }
    rows_to_table(path, rows, indicator_rows)
}

fn csv_cell(field: &str) -> CellValue {
    if field.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(field.to_string())
    }
}
