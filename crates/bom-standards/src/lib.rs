//! Embedded BOM reference data.
//!
//! - [`columns`]: canonical column → accepted header spellings
//! - [`sections`]: MIL-HDBK-217 chapters and sections, with a part type lookup
//!
//! # Example
//!
//! ```rust,ignore
//! use bom_standards::{ColumnCatalog, SectionTable};
//!
//! let catalog = ColumnCatalog::load_default()?;
//! let sections = SectionTable::load_default()?;
//! let chapter = sections.chapter_for(bom_model::PartType::Capacitor);
//! ```

pub mod columns;
pub mod embedded;
pub mod error;
pub mod sections;

pub use columns::{ColumnCatalog, ColumnSpec};
pub use error::{Result, StandardsError};
pub use sections::{Chapter, Section, SectionMatch, SectionTable};
