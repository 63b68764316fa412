//! BOM data model types.
//!
//! Shared by every stage of the pipeline:
//!
//! - [`cell`]: raw spreadsheet cells, rows and tables
//! - [`columns`]: the five canonical input columns
//! - [`part`]: part types and the attributes parsed from descriptions
//! - [`row`]: canonical rows, dropped rows and the pipeline's table
//! - [`options`]: processing options (sheet, indicator rows, rounding, extra header variants)
//! - [`diagnostics`]: the structured diagnostics sink

pub mod cell;
pub mod columns;
pub mod diagnostics;
pub mod error;
pub mod options;
pub mod part;
pub mod row;

pub use cell::{CellValue, RawRow, RawTable};
pub use columns::InputColumn;
pub use diagnostics::{Diagnostic, DiagnosticLevel, Diagnostics};
pub use error::{ModelError, Result};
pub use options::{
    DEFAULT_INDICATOR_ROWS, DEFAULT_SIGNIFICANT_DIGITS, PipelineOptions, SIGNIFICANT_DIGITS_RANGE,
    SheetSelector,
};
pub use part::{ParsedDescription, PartType, SubCategory};
pub use row::{BomTable, CANONICAL_COLUMNS, CanonicalRow, DroppedRow, RequiredInputs};
