//! Source readers.

mod delimited;
mod file;
mod table;
mod workbook;

use std::path::Path;

use bom_model::{PipelineOptions, RawTable};

use crate::error::{IngestError, Result};
use crate::format::SourceFormat;

pub use delimited::{read_csv_from_reader, read_csv_table};
pub use file::{MAX_FILE_SIZE, check_file_size, check_file_size_with_limit, validate_encoding};
pub use workbook::{list_sheets, read_workbook_table};

/// Reads a BOM file into a [`RawTable`], dispatching on the file extension.
///
/// The sheet selector applies to workbooks only; CSV files have a single table.
pub fn read_bom_table(path: &Path, options: &PipelineOptions) -> Result<RawTable> {
    let format = SourceFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    check_file_size(path)?;
    match format {
        SourceFormat::Csv => {
            validate_encoding(path)?;
            read_csv_table(path, options.indicator_rows)
        }
        SourceFormat::Workbook => read_workbook_table(path, &options.sheet, options.indicator_rows),
    }
}
