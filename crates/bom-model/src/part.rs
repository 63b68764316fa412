//! Part classification types derived from BOM descriptions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Part type derived from a free-text description.
///
/// `Unknown` is produced when the description is not text at all; an
/// unrecognized text description classifies as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartType {
    Resistor,
    Capacitor,
    #[serde(rename = "IC")]
    Ic,
    Inductor,
    Connector,
    Other,
    Unknown,
}

impl PartType {
    pub const ALL: [PartType; 7] = [
        PartType::Resistor,
        PartType::Capacitor,
        PartType::Ic,
        PartType::Inductor,
        PartType::Connector,
        PartType::Other,
        PartType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Resistor => "Resistor",
            PartType::Capacitor => "Capacitor",
            PartType::Ic => "IC",
            PartType::Inductor => "Inductor",
            PartType::Connector => "Connector",
            PartType::Other => "Other",
            PartType::Unknown => "Unknown",
        }
    }

    /// Resistors and capacitors carry a tolerance rating.
    pub fn requires_tolerance(&self) -> bool {
        matches!(self, PartType::Resistor | PartType::Capacitor)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PartType::Unknown)
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PartType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        PartType::ALL
            .into_iter()
            .find(|part_type| part_type.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ModelError::InvalidValue {
                field: "PartType",
                value: s.to_string(),
            })
    }
}

/// Capacitor dielectric family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubCategory {
    Ceramic,
    Tantalum,
}

impl SubCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubCategory::Ceramic => "Ceramic",
            SubCategory::Tantalum => "Tantalum",
        }
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attributes extracted from one description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDescription {
    pub part_type: PartType,
    pub sub_category: Option<SubCategory>,
    /// Value in base SI units (ohms, farads, ...).
    pub value: Option<f64>,
    /// Tolerance in percent.
    pub tolerance: Option<f64>,
    /// Voltage rating in volts.
    pub voltage: Option<f64>,
}

impl ParsedDescription {
    /// Result for descriptions that are not text.
    pub fn unknown() -> Self {
        Self {
            part_type: PartType::Unknown,
            sub_category: None,
            value: None,
            tolerance: None,
            voltage: None,
        }
    }

    /// Nothing usable was recognized.
    pub fn is_unrecognized(&self) -> bool {
        !self.part_type.is_known() || self.value.is_none()
    }
}
