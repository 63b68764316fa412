//! Per-row completeness annotation.

use std::fmt;

use bom_model::{CanonicalRow, PartType};
use serde::{Deserialize, Serialize};

/// Derived or identifying fields whose absence is reported, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CheckedField {
    ManufacturerPartNumber,
    PartType,
    Value,
    Tolerance,
    Voltage,
}

impl CheckedField {
    pub const ALL: [CheckedField; 5] = [
        CheckedField::ManufacturerPartNumber,
        CheckedField::PartType,
        CheckedField::Value,
        CheckedField::Tolerance,
        CheckedField::Voltage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckedField::ManufacturerPartNumber => "ManufacturerPartNumber",
            CheckedField::PartType => "PartType",
            CheckedField::Value => "Value",
            CheckedField::Tolerance => "Tolerance",
            CheckedField::Voltage => "Voltage",
        }
    }

    /// Whether this field is null on `row`.
    pub fn is_missing(&self, row: &CanonicalRow) -> bool {
        match self {
            CheckedField::ManufacturerPartNumber => row
                .manufacturer_part_number
                .as_deref()
                .is_none_or(|mpn| mpn.trim().is_empty()),
            CheckedField::PartType => row.part_type == PartType::Unknown,
            CheckedField::Value => row.value.is_none(),
            // Only resistors and capacitors carry a tolerance.
            CheckedField::Tolerance => {
                row.part_type.requires_tolerance() && row.tolerance.is_none()
            }
            CheckedField::Voltage => row.voltage.is_none(),
        }
    }
}

impl fmt::Display for CheckedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Missing fields of a row, in [`CheckedField::ALL`] order.
pub fn missing_fields(row: &CanonicalRow) -> Vec<CheckedField> {
    CheckedField::ALL
        .into_iter()
        .filter(|field| field.is_missing(row))
        .collect()
}

/// `MissingFields` text for a row: names joined with `", "`, empty when complete.
pub fn missing_fields_text(row: &CanonicalRow) -> String {
    missing_fields(row)
        .iter()
        .map(CheckedField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns a copy of `rows` with `MissingFields` filled in.
///
/// Input order is preserved and re-running on the output gives the same rows.
pub fn identify_missing_info(rows: &[CanonicalRow]) -> Vec<CanonicalRow> {
    let annotated: Vec<CanonicalRow> = rows
        .iter()
        .map(|row| CanonicalRow {
            missing_fields: missing_fields_text(row),
            ..row.clone()
        })
        .collect();
    tracing::debug!(
        rows = annotated.len(),
        incomplete = annotated.iter().filter(|row| !row.is_complete()).count(),
        "completeness annotated"
    );
    annotated
}
