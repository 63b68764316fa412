//! Column mapping errors.

use bom_model::InputColumn;
use bom_standards::StandardsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// A canonical column has no matching header.
    #[error(
        "required column '{column}' not found; accepted headers: {}; headers in sheet: {}",
        variants.join(", "),
        available.join(", ")
    )]
    MissingColumn {
        column: InputColumn,
        variants: Vec<String>,
        available: Vec<String>,
    },

    /// The variant table could not be loaded or extended.
    #[error(transparent)]
    Standards(#[from] StandardsError),
}

pub type Result<T> = std::result::Result<T, MapError>;
