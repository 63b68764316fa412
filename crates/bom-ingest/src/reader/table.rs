//! Turns a stream of sheet rows into a [`RawTable`].

use std::path::Path;

use bom_model::{CellValue, RawRow, RawTable};

use crate::error::{IngestError, Result};

/// Builds a table from rows in sheet order.
///
/// The first `indicator_rows` rows are skipped, the next row supplies the
/// headers and every row after it is data. Row numbers are 1-based positions
/// in the sheet. Fully blank data rows are kept; the transform stage decides
/// what to do with them.
pub(crate) fn rows_to_table<I>(path: &Path, rows: I, indicator_rows: usize) -> Result<RawTable>
where
    I: IntoIterator<Item = Vec<CellValue>>,
{
    let mut rows = rows.into_iter().skip(indicator_rows);
    let header_cells = rows.next().ok_or_else(|| IngestError::NoHeaderDetected {
        path: path.to_path_buf(),
        indicator_rows,
    })?;
    if header_cells.iter().all(CellValue::is_null) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
            indicator_rows,
        });
    }

    let headers = header_cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| header_text(idx, cell))
        .collect();
    let mut table = RawTable::new(headers);
    let first_data_row = indicator_rows + 2;
    for (offset, cells) in rows.enumerate() {
        table.push_row(RawRow::new(first_data_row + offset, cells));
    }

    tracing::debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.height(),
        "read raw BOM table"
    );
    Ok(table)
}

/// Header text for a cell. Blank headers get a positional placeholder.
fn header_text(idx: usize, cell: &CellValue) -> String {
    cell.to_display().unwrap_or_else(|| format!("Unnamed: {idx}"))
}
