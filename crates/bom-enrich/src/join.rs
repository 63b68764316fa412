//! Left join of canonical rows with reliability records.

use std::collections::{HashMap, HashSet};

use bom_model::CanonicalRow;
use bom_standards::SectionTable;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lookup::{PartInfoLookup, PartReliabilityInfo};

/// A canonical row with its handbook chapter and reliability figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRow {
    #[serde(flatten)]
    pub row: CanonicalRow,
    /// e.g. `"9 RESISTORS"`; unset for unclassified parts.
    #[serde(rename = "MilHdbkSection")]
    pub section: Option<String>,
    #[serde(rename = "BaseFailureRate")]
    pub base_failure_rate: Option<f64>,
    #[serde(rename = "QualityFactor")]
    pub quality_factor: Option<f64>,
    #[serde(rename = "EnvironmentalFactor")]
    pub environmental_factor: Option<f64>,
}

impl EnrichedRow {
    /// Row with no reliability figures.
    pub fn bare(row: CanonicalRow, section: Option<String>) -> Self {
        Self {
            row,
            section,
            base_failure_rate: None,
            quality_factor: None,
            environmental_factor: None,
        }
    }

    fn with_info(mut self, info: Option<&PartReliabilityInfo>) -> Self {
        if let Some(info) = info {
            self.base_failure_rate = Some(info.base_failure_rate);
            self.quality_factor = Some(info.quality_factor);
            self.environmental_factor = Some(info.environmental_factor);
        }
        self
    }
}

/// Handbook chapter label for a row's part type.
pub fn section_label(row: &CanonicalRow, sections: &SectionTable) -> Option<String> {
    sections
        .chapter_for(row.part_type)
        .map(|chapter| format!("{} {}", chapter.number, chapter.title))
}

/// Attaches sections only, without consulting a lookup.
pub fn attach_sections(rows: Vec<CanonicalRow>, sections: &SectionTable) -> Vec<EnrichedRow> {
    rows.into_iter()
        .map(|row| {
            let section = section_label(&row, sections);
            EnrichedRow::bare(row, section)
        })
        .collect()
}

/// Left-joins `rows` with `lookup` results on `FN` = `PartNumber`.
///
/// Every input row appears once in the output, in input order. When the lookup
/// returns several records for one part number the first is used.
pub fn enrich(
    rows: Vec<CanonicalRow>,
    lookup: &dyn PartInfoLookup,
    sections: &SectionTable,
) -> Result<Vec<EnrichedRow>> {
    let ids: Vec<String> = {
        let mut seen = HashSet::new();
        rows.iter()
            .filter(|row| seen.insert(row.find_number.as_str()))
            .map(|row| row.find_number.clone())
            .collect()
    };
    let records = lookup.lookup(&ids)?;

    let mut by_part: HashMap<&str, &PartReliabilityInfo> = HashMap::with_capacity(records.len());
    for record in &records {
        by_part.entry(record.part_number.as_str()).or_insert(record);
    }

    let enriched: Vec<EnrichedRow> = rows
        .into_iter()
        .map(|row| {
            let info = by_part.get(row.find_number.as_str()).copied();
            let section = section_label(&row, sections);
            EnrichedRow::bare(row, section).with_info(info)
        })
        .collect();

    tracing::debug!(
        rows = enriched.len(),
        matched = enriched.iter().filter(|row| row.base_failure_rate.is_some()).count(),
        "rows enriched"
    );
    Ok(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnrichError;
    use crate::lookup::PlaceholderLookup;
    use bom_model::{ParsedDescription, PartType, RequiredInputs};

    fn row(find_number: &str, part_type: PartType) -> CanonicalRow {
        CanonicalRow::new(
            RequiredInputs {
                source_row: 3,
                find_number: find_number.to_string(),
                manufacturer_part_number: "PN".to_string(),
                quantity: 1.0,
                description: "desc".to_string(),
                drawing_ref: "X1".to_string(),
            },
            ParsedDescription {
                part_type,
                ..ParsedDescription::unknown()
            },
        )
    }

    struct OnlyFirst;

    impl PartInfoLookup for OnlyFirst {
        fn lookup(&self, part_ids: &[String]) -> Result<Vec<PartReliabilityInfo>> {
            PlaceholderLookup::default().lookup(&part_ids[..1])
        }
    }

    struct Offline;

    impl PartInfoLookup for Offline {
        fn lookup(&self, _part_ids: &[String]) -> Result<Vec<PartReliabilityInfo>> {
            Err(EnrichError::Lookup {
                message: "service unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_placeholder_join() {
        let sections = SectionTable::load_default().unwrap();
        let rows = vec![row("1", PartType::Resistor), row("2", PartType::Other)];
        let enriched = enrich(rows, &PlaceholderLookup::default(), &sections).unwrap();
        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].section.as_deref(), Some("9 RESISTORS"));
        assert_eq!(enriched[0].base_failure_rate, Some(0.0015));
        assert_eq!(enriched[1].section, None);
        assert_eq!(enriched[1].quality_factor, Some(1.1));
    }

    #[test]
    fn test_unmatched_rows_are_kept() {
        let sections = SectionTable::load_default().unwrap();
        let rows = vec![row("1", PartType::Capacitor), row("2", PartType::Ic)];
        let enriched = enrich(rows, &OnlyFirst, &sections).unwrap();
        assert_eq!(enriched[1].row.find_number, "2");
        assert_eq!(enriched[1].base_failure_rate, None);
        assert_eq!(enriched[1].section.as_deref(), Some("5 MICROCIRCUITS"));
    }

    #[test]
    fn test_lookup_error_propagates() {
        let sections = SectionTable::load_default().unwrap();
        let err = enrich(vec![row("1", PartType::Other)], &Offline, &sections).unwrap_err();
        assert_eq!(
            err.to_string(),
            "part information lookup failed: service unavailable"
        );
    }

    #[test]
    fn test_flattened_json() {
        let enriched = EnrichedRow::bare(row("4", PartType::Other), None);
        let json = serde_json::to_value(&enriched).unwrap();
        assert_eq!(json["FN"], "4");
        assert!(json["BaseFailureRate"].is_null());
    }
}
