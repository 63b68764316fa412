//! Resolves raw spreadsheet headers to the canonical input columns.

use bom_model::{Diagnostic, Diagnostics, InputColumn, PipelineOptions};
use bom_standards::ColumnCatalog;

use crate::error::{MapError, Result};
use crate::header::clean_header;

/// Where each canonical column lives in the raw table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    /// `(raw header, column)` pairs in header order.
    assignments: Vec<(String, InputColumn)>,
    /// Raw column index, indexed by [`InputColumn::index`].
    indices: [usize; InputColumn::ALL.len()],
}

impl ColumnMapping {
    /// Raw column index holding `column`.
    pub fn index_of(&self, column: InputColumn) -> usize {
        self.indices[column.index()]
    }

    /// Raw header mapped to `column`.
    pub fn header_for(&self, column: InputColumn) -> &str {
        self.assignments
            .iter()
            .find(|(_, mapped)| *mapped == column)
            .map(|(header, _)| header.as_str())
            .unwrap_or_default()
    }

    pub fn assignments(&self) -> &[(String, InputColumn)] {
        &self.assignments
    }
}

/// Matches headers against the canonical variant table.
#[derive(Debug, Clone)]
pub struct ColumnNormalizer {
    catalog: ColumnCatalog,
    /// Cleaned variants per column, in canonical order.
    cleaned: Vec<(InputColumn, Vec<String>)>,
}

impl ColumnNormalizer {
    pub fn new(catalog: ColumnCatalog) -> Self {
        let cleaned = catalog
            .specs()
            .iter()
            .map(|spec| {
                let variants = spec.variants.iter().map(|v| clean_header(v)).collect();
                (spec.column, variants)
            })
            .collect();
        Self { catalog, cleaned }
    }

    /// Normalizer over the embedded table plus the configured extra variants.
    pub fn from_options(options: &PipelineOptions) -> Result<Self> {
        let catalog = ColumnCatalog::load_default()?.with_extra_variants(&options.extra_variants)?;
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &ColumnCatalog {
        &self.catalog
    }

    /// Canonical column a single header resolves to, if any.
    pub fn match_header(&self, header: &str) -> Option<InputColumn> {
        let cleaned = clean_header(header);
        if cleaned.is_empty() {
            return None;
        }
        self.cleaned
            .iter()
            .find(|(_, variants)| variants.iter().any(|variant| *variant == cleaned))
            .map(|(column, _)| *column)
    }

    /// Maps `headers` to canonical columns.
    ///
    /// The left-most header claiming a column keeps it. Fails on the first
    /// canonical column (in canonical order) that no header matched.
    pub fn normalize(
        &self,
        headers: &[String],
        diagnostics: &mut Diagnostics,
    ) -> Result<ColumnMapping> {
        let mut slots: [Option<usize>; InputColumn::ALL.len()] = [None; InputColumn::ALL.len()];
        let mut assignments = Vec::new();

        for (idx, header) in headers.iter().enumerate() {
            let Some(column) = self.match_header(header) else {
                continue;
            };
            match slots[column.index()] {
                Some(kept) => diagnostics.record(Diagnostic::DuplicateColumn {
                    header: header.clone(),
                    column,
                    kept: headers[kept].clone(),
                }),
                None => {
                    slots[column.index()] = Some(idx);
                    assignments.push((header.clone(), column));
                }
            }
        }

        let mut indices = [0usize; InputColumn::ALL.len()];
        for column in InputColumn::ALL {
            let Some(idx) = slots[column.index()] else {
                tracing::debug!(column = column.key(), headers = headers.len(), "column not found");
                return Err(MapError::MissingColumn {
                    column,
                    variants: self.catalog.variants_for(column).to_vec(),
                    available: headers.to_vec(),
                });
            };
            indices[column.index()] = idx;
        }

        diagnostics.record(Diagnostic::ColumnsMapped {
            mapping: assignments.clone(),
        });
        Ok(ColumnMapping {
            assignments,
            indices,
        })
    }
}
