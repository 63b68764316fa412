//! Configuration options for BOM processing.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of significant digits kept on every derived numeric.
pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 4;

/// Accepted `significant_digits`; an `f64` carries at most 17.
pub const SIGNIFICANT_DIGITS_RANGE: RangeInclusive<u32> = 1..=17;

/// Indicator rows above the real header row.
pub const DEFAULT_INDICATOR_ROWS: usize = 1;

/// Which worksheet of a workbook to read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetSelector {
    /// 0-based sheet position.
    Index(usize),
    /// Sheet name, matched exactly.
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Index(index) => write!(f, "#{index}"),
            SheetSelector::Name(name) => write!(f, "'{name}'"),
        }
    }
}

impl FromStr for SheetSelector {
    type Err = std::convert::Infallible;

    /// Digits select by position, anything else by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<usize>() {
            Ok(index) => SheetSelector::Index(index),
            Err(_) => SheetSelector::Name(trimmed.to_string()),
        })
    }
}

/// Options controlling BOM ingestion and parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Worksheet to read (ignored for CSV sources).
    pub sheet: SheetSelector,

    /// Rows skipped above the header row.
    pub indicator_rows: usize,

    /// Significant digits kept on Value, Tolerance and Voltage.
    pub significant_digits: u32,

    /// Additional accepted header spellings per canonical key
    /// (e.g. `FN = ["line", "line no"]`).
    pub extra_variants: BTreeMap<String, Vec<String>>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            sheet: SheetSelector::default(),
            indicator_rows: DEFAULT_INDICATOR_ROWS,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            extra_variants: BTreeMap::new(),
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: SheetSelector) -> Self {
        self.sheet = sheet;
        self
    }

    #[must_use]
    pub fn with_indicator_rows(mut self, rows: usize) -> Self {
        self.indicator_rows = rows;
        self
    }

    #[must_use]
    pub fn with_significant_digits(mut self, digits: u32) -> Self {
        self.significant_digits = digits;
        self
    }

    #[must_use]
    pub fn with_extra_variant(mut self, key: &str, variant: &str) -> Self {
        self.extra_variants
            .entry(key.to_string())
            .or_default()
            .push(variant.to_string());
        self
    }
}
