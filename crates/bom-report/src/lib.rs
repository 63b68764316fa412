//! BOM report output.
//!
//! The data table (canonical columns plus enrichment columns) is built as a
//! polars `DataFrame` and written with its CSV writer; the summary table is a
//! `Metric,Value` CSV whose first metric is the total base failure rate. JSON
//! output carries the same summary and rows in one document.

mod error;
mod frame;
mod options;
mod summary;
mod writer;

pub use error::{ReportError, Result};
pub use frame::{ENRICHMENT_COLUMNS, to_dataframe, total_base_failure_rate};
pub use options::{ReportFormat, ReportOptions};
pub use summary::ReportSummary;
pub use writer::{ReportPaths, write_data_csv, write_json, write_report, write_summary_csv};
