//! Column normalization for BOM sheets.
//!
//! Headers are cleaned (lowercase, letters and digits only) and compared with
//! the accepted variants of each canonical column. Every canonical column must
//! be found before any row is processed.

mod error;
mod header;
mod normalizer;

pub use error::{MapError, Result};
pub use header::clean_header;
pub use normalizer::{ColumnMapping, ColumnNormalizer};
