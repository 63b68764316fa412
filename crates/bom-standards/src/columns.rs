//! Canonical column variant table.

use std::collections::BTreeMap;

use bom_model::InputColumn;
use serde::Deserialize;

use crate::embedded::COLUMN_VARIANTS;
use crate::error::{Result, StandardsError};

/// Accepted header spellings for one canonical column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnSpec {
    #[serde(rename = "key")]
    pub column: InputColumn,
    pub variants: Vec<String>,
}

#[derive(Deserialize)]
struct ColumnFile {
    column: Vec<ColumnSpec>,
}

/// Variant table for all five canonical columns, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnCatalog {
    specs: Vec<ColumnSpec>,
}

impl ColumnCatalog {
    /// Loads the embedded variant table.
    pub fn load_default() -> Result<Self> {
        Self::from_toml("columns.toml", COLUMN_VARIANTS)
    }

    fn from_toml(name: &'static str, content: &str) -> Result<Self> {
        let file: ColumnFile =
            toml::from_str(content).map_err(|source| StandardsError::Toml { name, source })?;
        Self::from_specs(file.column)
    }

    /// Builds a catalog, ordering specs canonically and requiring every column.
    pub fn from_specs(specs: Vec<ColumnSpec>) -> Result<Self> {
        let mut ordered = Vec::with_capacity(InputColumn::ALL.len());
        for column in InputColumn::ALL {
            let mut variants = Vec::new();
            let mut seen = false;
            for spec in specs.iter().filter(|spec| spec.column == column) {
                seen = true;
                variants.extend(spec.variants.iter().cloned());
            }
            if !seen {
                return Err(StandardsError::MissingColumn {
                    column: column.key().to_string(),
                });
            }
            ordered.push(ColumnSpec { column, variants });
        }
        Ok(Self { specs: ordered })
    }

    /// Appends configured variants after the built-in ones.
    pub fn with_extra_variants(mut self, extra: &BTreeMap<String, Vec<String>>) -> Result<Self> {
        for (key, variants) in extra {
            let column: InputColumn = key
                .parse()
                .map_err(|_| StandardsError::UnknownColumn { key: key.clone() })?;
            if let Some(spec) = self.specs.iter_mut().find(|spec| spec.column == column) {
                for variant in variants {
                    if !spec.variants.contains(variant) {
                        spec.variants.push(variant.clone());
                    }
                }
            }
        }
        Ok(self)
    }

    pub fn specs(&self) -> &[ColumnSpec] {
        &self.specs
    }

    pub fn variants_for(&self, column: InputColumn) -> &[String] {
        self.specs
            .iter()
            .find(|spec| spec.column == column)
            .map(|spec| spec.variants.as_slice())
            .unwrap_or(&[])
    }
}
