//! BOM ingestion.
//!
//! Loads a BOM spreadsheet (xlsx/xlsm/xls/xlsb/ods through calamine, or CSV)
//! into an untyped [`bom_model::RawTable`]. Indicator rows above the header
//! are skipped; headers are kept exactly as written so the mapping stage can
//! resolve them.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use bom_ingest::read_bom_table;
//! use bom_model::PipelineOptions;
//!
//! let table = read_bom_table(Path::new("BOM Only.xlsx"), &PipelineOptions::default())?;
//! println!("{} rows", table.height());
//! ```

mod error;
mod format;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Format Detection ===
pub use format::SourceFormat;

// === Readers ===
pub use reader::{
    MAX_FILE_SIZE, check_file_size, check_file_size_with_limit, list_sheets, read_bom_table,
    read_csv_from_reader, read_csv_table, read_workbook_table, validate_encoding,
};
