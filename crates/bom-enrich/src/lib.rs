//! Reliability enrichment.
//!
//! Rows are left-joined on `FN` with records from a [`PartInfoLookup`] and
//! tagged with the MIL-HDBK-217 chapter for their part type. The bundled
//! [`PlaceholderLookup`] returns constant figures; a real parts database
//! implements the same trait.

mod error;
mod join;
mod lookup;

pub use error::{EnrichError, Result};
pub use join::{EnrichedRow, attach_sections, enrich, section_label};
pub use lookup::{PartInfoLookup, PartReliabilityInfo, PlaceholderLookup};
