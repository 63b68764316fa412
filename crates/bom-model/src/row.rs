//! Canonical BOM rows and the pipeline's row-level outcome.

use serde::{Deserialize, Serialize};

use crate::columns::InputColumn;
use crate::part::{ParsedDescription, PartType, SubCategory};

/// Output column names of the canonical table, in order.
pub const CANONICAL_COLUMNS: [&str; 13] = [
    "FN",
    "ManufacturerPartNumber",
    "Quantity",
    "Description",
    "DrawingRef",
    "PartType",
    "SubCategory",
    "Value",
    "Tolerance",
    "Voltage",
    "AdditionalInfo",
    "MissingFields",
    "SourceRow",
];

/// A normalized BOM line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRow {
    #[serde(rename = "FN")]
    pub find_number: String,
    /// Always present after the pipeline; optional so tables assembled
    /// elsewhere can still be checked for completeness.
    #[serde(rename = "ManufacturerPartNumber")]
    pub manufacturer_part_number: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "DrawingRef")]
    pub drawing_ref: String,
    #[serde(rename = "PartType")]
    pub part_type: PartType,
    #[serde(rename = "SubCategory")]
    pub sub_category: Option<SubCategory>,
    #[serde(rename = "Value")]
    pub value: Option<f64>,
    #[serde(rename = "Tolerance")]
    pub tolerance: Option<f64>,
    #[serde(rename = "Voltage")]
    pub voltage: Option<f64>,
    #[serde(rename = "AdditionalInfo")]
    pub additional_info: String,
    #[serde(rename = "MissingFields")]
    pub missing_fields: String,
    /// 1-based spreadsheet row the item was read from (0 when unknown).
    #[serde(rename = "SourceRow")]
    pub source_row: usize,
}

impl CanonicalRow {
    /// Builds a row from the required inputs and the parsed description.
    pub fn new(inputs: RequiredInputs, parsed: ParsedDescription) -> Self {
        Self {
            find_number: inputs.find_number,
            manufacturer_part_number: Some(inputs.manufacturer_part_number),
            quantity: inputs.quantity,
            description: inputs.description,
            drawing_ref: inputs.drawing_ref,
            part_type: parsed.part_type,
            sub_category: parsed.sub_category,
            value: parsed.value,
            tolerance: parsed.tolerance,
            voltage: parsed.voltage,
            additional_info: String::new(),
            missing_fields: String::new(),
            source_row: inputs.source_row,
        }
    }

    pub fn parsed(&self) -> ParsedDescription {
        ParsedDescription {
            part_type: self.part_type,
            sub_category: self.sub_category,
            value: self.value,
            tolerance: self.tolerance,
            voltage: self.voltage,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields.is_empty()
    }
}

/// The five required inputs of one row, already validated as present.
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredInputs {
    pub source_row: usize,
    pub find_number: String,
    pub manufacturer_part_number: String,
    pub quantity: f64,
    pub description: String,
    pub drawing_ref: String,
}

/// A source row excluded because required inputs were null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedRow {
    /// 1-based spreadsheet row number.
    pub row_number: usize,
    pub missing: Vec<InputColumn>,
}

impl DroppedRow {
    pub fn missing_keys(&self) -> String {
        self.missing
            .iter()
            .map(InputColumn::key)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Rows kept by the pipeline plus the rows it dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BomTable {
    pub rows: Vec<CanonicalRow>,
    pub dropped: Vec<DroppedRow>,
}

impl BomTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
