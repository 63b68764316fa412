//! BOM transformation.
//!
//! - [`units`]: unit suffix multipliers and significant-figure rounding
//! - [`description`]: part type, value, tolerance and voltage from free text
//! - [`canonical`]: projection of raw rows onto the canonical schema, with
//!   null-row dropping

pub mod canonical;
pub mod description;
pub mod units;

pub use canonical::build_canonical_rows;
pub use description::{parse_description, parse_description_cell};
pub use units::{ParseFailure, convert_value, round_sig, unit_multiplier};
