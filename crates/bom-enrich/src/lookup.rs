//! Part reliability lookups.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Reliability figures for one part number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartReliabilityInfo {
    #[serde(rename = "PartNumber")]
    pub part_number: String,
    #[serde(rename = "BaseFailureRate")]
    pub base_failure_rate: f64,
    #[serde(rename = "QualityFactor")]
    pub quality_factor: f64,
    #[serde(rename = "EnvironmentalFactor")]
    pub environmental_factor: f64,
}

/// Source of reliability figures, keyed by part identifier.
pub trait PartInfoLookup {
    /// Returns records for the identifiers it knows. Unknown identifiers are
    /// simply absent from the result.
    fn lookup(&self, part_ids: &[String]) -> Result<Vec<PartReliabilityInfo>>;
}

/// Constant figures for every identifier, one record per distinct id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderLookup {
    pub base_failure_rate: f64,
    pub quality_factor: f64,
    pub environmental_factor: f64,
}

impl Default for PlaceholderLookup {
    fn default() -> Self {
        Self {
            base_failure_rate: 0.0015,
            quality_factor: 1.1,
            environmental_factor: 0.95,
        }
    }
}

impl PartInfoLookup for PlaceholderLookup {
    fn lookup(&self, part_ids: &[String]) -> Result<Vec<PartReliabilityInfo>> {
        let mut seen = HashSet::new();
        Ok(part_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .map(|id| PartReliabilityInfo {
                part_number: id.clone(),
                base_failure_rate: self.base_failure_rate,
                quality_factor: self.quality_factor,
                environmental_factor: self.environmental_factor,
            })
            .collect())
    }
}
