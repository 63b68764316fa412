//! Completeness checks for canonical BOM rows.
//!
//! A row is complete when it has a manufacturer part number, a recognized
//! part type, a value and a voltage rating, plus a tolerance when it is a
//! resistor or capacitor.

mod completeness;
mod summary;

pub use completeness::{CheckedField, identify_missing_info, missing_fields, missing_fields_text};
pub use summary::CompletenessSummary;
