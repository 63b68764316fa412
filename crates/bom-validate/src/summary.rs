//! Aggregate completeness figures for a BOM.

use bom_model::{CanonicalRow, PartType};
use serde::Serialize;

use crate::completeness::{CheckedField, missing_fields};

/// Totals across all kept rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessSummary {
    pub total_rows: usize,
    pub complete_rows: usize,
    /// Rows missing each field, in [`CheckedField::ALL`] order.
    pub missing_counts: Vec<(CheckedField, usize)>,
    /// Rows per part type, in [`PartType::ALL`] order, zero counts omitted.
    pub part_types: Vec<(PartType, usize)>,
}

impl CompletenessSummary {
    pub fn from_rows(rows: &[CanonicalRow]) -> Self {
        let mut missing = [0usize; CheckedField::ALL.len()];
        let mut part_types = [0usize; PartType::ALL.len()];
        let mut complete_rows = 0;

        for row in rows {
            let fields = missing_fields(row);
            if fields.is_empty() {
                complete_rows += 1;
            }
            for field in fields {
                missing[field as usize] += 1;
            }
            part_types[row.part_type as usize] += 1;
        }

        Self {
            total_rows: rows.len(),
            complete_rows,
            missing_counts: CheckedField::ALL.into_iter().zip(missing).collect(),
            part_types: PartType::ALL
                .into_iter()
                .zip(part_types)
                .filter(|(_, count)| *count > 0)
                .collect(),
        }
    }

    pub fn incomplete_rows(&self) -> usize {
        self.total_rows - self.complete_rows
    }

    pub fn missing_count(&self, field: CheckedField) -> usize {
        self.missing_counts
            .iter()
            .find(|(f, _)| *f == field)
            .map_or(0, |(_, count)| *count)
    }
}
