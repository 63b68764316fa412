//! Embedded reference data.
//!
//! Tables are compiled in with `include_str!()` so loading never touches
//! the filesystem.

/// Canonical column → accepted header spellings.
pub const COLUMN_VARIANTS: &str = include_str!("../data/columns.toml");

/// MIL-HDBK-217 chapters and sections.
pub const MIL_HDBK_217_SECTIONS: &str = include_str!("../data/mil_hdbk_217_sections.csv");
