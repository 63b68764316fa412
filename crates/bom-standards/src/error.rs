//! Error types for reference data loading.

use thiserror::Error;

/// Errors that can occur when loading embedded reference data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// The column variant table is not valid TOML.
    #[error("failed to parse column table {name}: {source}")]
    Toml {
        name: &'static str,
        #[source]
        source: toml::de::Error,
    },

    /// The section table is not valid CSV.
    #[error("failed to read CSV {name}: {source}")]
    CsvRead {
        name: &'static str,
        #[source]
        source: csv::Error,
    },

    /// A canonical column has no entry in the variant table.
    #[error("column table has no entry for canonical column {column}")]
    MissingColumn { column: String },

    /// Extra variants were configured for a key that is not a canonical column.
    #[error("unknown canonical column '{key}' in extra variants")]
    UnknownColumn { key: String },

    /// Invalid value in a reference data field.
    #[error("invalid {field} value '{value}' in {file}")]
    InvalidValue {
        field: &'static str,
        value: String,
        file: &'static str,
    },
}

/// Result type for reference data operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
