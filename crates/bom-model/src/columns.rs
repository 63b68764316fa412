//! Canonical input columns every BOM must provide.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The five required input columns, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputColumn {
    #[serde(rename = "FN")]
    FindNumber,
    ManufacturerPartNumber,
    Quantity,
    Description,
    DrawingRef,
}

impl InputColumn {
    pub const ALL: [InputColumn; 5] = [
        InputColumn::FindNumber,
        InputColumn::ManufacturerPartNumber,
        InputColumn::Quantity,
        InputColumn::Description,
        InputColumn::DrawingRef,
    ];

    /// Canonical key as used in output tables.
    pub fn key(&self) -> &'static str {
        match self {
            InputColumn::FindNumber => "FN",
            InputColumn::ManufacturerPartNumber => "ManufacturerPartNumber",
            InputColumn::Quantity => "Quantity",
            InputColumn::Description => "Description",
            InputColumn::DrawingRef => "DrawingRef",
        }
    }

    /// Position in the canonical projection.
    pub fn index(&self) -> usize {
        match self {
            InputColumn::FindNumber => 0,
            InputColumn::ManufacturerPartNumber => 1,
            InputColumn::Quantity => 2,
            InputColumn::Description => 3,
            InputColumn::DrawingRef => 4,
        }
    }
}

impl fmt::Display for InputColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for InputColumn {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        InputColumn::ALL
            .into_iter()
            .find(|column| column.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::InvalidValue {
                field: "column",
                value: s.to_string(),
            })
    }
}
