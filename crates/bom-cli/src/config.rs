//! TOML configuration file for the `bom` command.
//!
//! ```toml
//! [pipeline]
//! sheet = "BOM"
//! indicator_rows = 1
//! significant_digits = 4
//!
//! [pipeline.extra_variants]
//! Quantity = ["pcs req'd"]
//!
//! [report]
//! output_dir = "output"
//! format = "both"
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use bom_model::{PipelineOptions, SIGNIFICANT_DIGITS_RANGE};
use bom_report::ReportOptions;
use bom_standards::ColumnCatalog;
use serde::Deserialize;

/// Settings loaded from `--config`; command-line flags override them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BomConfig {
    pub pipeline: PipelineOptions,
    pub report: ReportOptions,
}

impl BomConfig {
    /// Reads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects out-of-range significant digits and extra header variants for
    /// keys that are not canonical columns.
    pub fn validate(&self) -> Result<()> {
        let digits = self.pipeline.significant_digits;
        if !SIGNIFICANT_DIGITS_RANGE.contains(&digits) {
            bail!(
                "invalid [pipeline] significant_digits {digits}: expected {}..={}",
                SIGNIFICANT_DIGITS_RANGE.start(),
                SIGNIFICANT_DIGITS_RANGE.end()
            );
        }
        ColumnCatalog::load_default()
            .context("load column variants")?
            .with_extra_variants(&self.pipeline.extra_variants)
            .context("invalid [pipeline.extra_variants]")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bom_model::SheetSelector;
    use bom_report::ReportFormat;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(BomConfig::from_toml_str("").unwrap(), BomConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = BomConfig::from_toml_str(
            r#"
            [pipeline]
            sheet = "BOM"
            indicator_rows = 2

            [pipeline.extra_variants]
            FN = ["line"]

            [report]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.pipeline.sheet, SheetSelector::Name("BOM".to_string()));
        assert_eq!(config.pipeline.indicator_rows, 2);
        assert_eq!(config.pipeline.significant_digits, 4);
        assert_eq!(config.report.format, ReportFormat::Json);
    }

    #[test]
    fn test_unknown_variant_key_rejected() {
        let err = BomConfig::from_toml_str("[pipeline.extra_variants]\nVendor = [\"supplier\"]\n")
            .unwrap_err();
        insta::assert_snapshot!(
            format!("{err:#}"),
            @"invalid [pipeline.extra_variants]: unknown canonical column 'Vendor' in extra variants"
        );
    }

    #[test]
    fn test_significant_digits_out_of_range() {
        let err =
            BomConfig::from_toml_str("[pipeline]\nsignificant_digits = 400\n").unwrap_err();
        insta::assert_snapshot!(
            format!("{err:#}"),
            @"invalid [pipeline] significant_digits 400: expected 1..=17"
        );
        assert!(BomConfig::from_toml_str("[pipeline]\nsignificant_digits = 0\n").is_err());
        let config = BomConfig::from_toml_str("[pipeline]\nsignificant_digits = 17\n").unwrap();
        assert_eq!(config.pipeline.significant_digits, 17);
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(BomConfig::from_toml_str("[output]\ndir = \"x\"\n").is_err());
    }
}
