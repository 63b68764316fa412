use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::{info, info_span};

use bom_cli::config::BomConfig;
use bom_cli::pipeline::{check_completeness, enrich_rows, process_bom};
use bom_enrich::{PartInfoLookup, PlaceholderLookup};
use bom_model::{BomTable, Diagnostics, PipelineOptions};
use bom_report::{ReportFormat, ReportOptions, ReportSummary, write_report};
use bom_standards::{ColumnCatalog, SectionTable};

use crate::cli::{OutputFormatArg, ProcessArgs, SectionsArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell, title_cell};
use crate::types::ProcessResult;

pub fn run_columns() -> Result<()> {
    let catalog = ColumnCatalog::load_default().context("load column variants")?;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Accepted headers")]);
    apply_table_style(&mut table);
    for spec in catalog.specs() {
        table.add_row(vec![
            title_cell(spec.column.key()),
            Cell::new(spec.variants.join(", ")),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_sections(args: &SectionsArgs) -> Result<()> {
    let sections = SectionTable::load_default().context("load MIL-HDBK-217 sections")?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Chapter"),
        header_cell("Section"),
        header_cell("Title"),
    ]);
    apply_table_style(&mut table);

    match args.search.as_deref() {
        Some(text) => {
            let matches = sections.search(text);
            if matches.is_empty() {
                println!("No MIL-HDBK-217 sections match '{text}'.");
                return Ok(());
            }
            for hit in matches {
                let row = match hit.section {
                    Some(section) => vec![
                        Cell::new(hit.chapter.number),
                        Cell::new(&section.id),
                        Cell::new(&section.title),
                    ],
                    None => vec![
                        title_cell(hit.chapter.number),
                        dim_cell("-"),
                        title_cell(&hit.chapter.title),
                    ],
                };
                table.add_row(row);
            }
        }
        None => {
            for chapter in sections.chapters() {
                table.add_row(vec![
                    title_cell(chapter.number),
                    dim_cell("-"),
                    title_cell(&chapter.title),
                ]);
                for section in &chapter.sections {
                    table.add_row(vec![
                        dim_cell(chapter.number),
                        Cell::new(&section.id),
                        Cell::new(&section.title),
                    ]);
                }
            }
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let span = info_span!("process", file = %args.file.display());
    let _guard = span.enter();
    let start = Instant::now();

    let config = match &args.config {
        Some(path) => BomConfig::load(path)?,
        None => BomConfig::default(),
    };
    let (pipeline_options, report_options) = resolve_options(args, config);

    let mut diagnostics = Diagnostics::new();
    let BomTable { rows, dropped } = process_bom(&args.file, &pipeline_options, &mut diagnostics)?;
    let (rows, completeness) = check_completeness(&rows);

    let placeholder = PlaceholderLookup::default();
    let lookup = (!args.no_enrich).then_some(&placeholder as &dyn PartInfoLookup);
    let rows = enrich_rows(rows, lookup)?;

    let summary = ReportSummary::new(&args.file, &rows, dropped.len(), &completeness);
    let report = if args.dry_run {
        info!("dry run, no report written");
        None
    } else {
        Some(write_report(&rows, &summary, &report_options).context("write report")?)
    };

    info!(
        kept = rows.len(),
        dropped = dropped.len(),
        incomplete = completeness.incomplete_rows(),
        duration_ms = start.elapsed().as_millis(),
        "BOM processed"
    );
    Ok(ProcessResult {
        source: args.file.clone(),
        rows,
        dropped,
        completeness,
        diagnostics: diagnostics.into_events(),
        total_base_failure_rate: summary.total_base_failure_rate,
        report,
        enriched: lookup.is_some(),
    })
}

/// Config file values, overridden by the flags that were given.
fn resolve_options(args: &ProcessArgs, config: BomConfig) -> (PipelineOptions, ReportOptions) {
    let BomConfig {
        mut pipeline,
        mut report,
    } = config;
    if let Some(sheet) = &args.sheet {
        pipeline = pipeline.with_sheet(sheet.clone());
    }
    if let Some(rows) = args.indicator_rows {
        pipeline = pipeline.with_indicator_rows(rows);
    }
    if let Some(dir) = &args.output_dir {
        report = report.with_output_dir(dir.clone());
    }
    if let Some(format) = args.format {
        report = report.with_format(report_format(format));
    }
    (pipeline, report)
}

fn report_format(format: OutputFormatArg) -> ReportFormat {
    match format {
        OutputFormatArg::Csv => ReportFormat::Csv,
        OutputFormatArg::Json => ReportFormat::Json,
        OutputFormatArg::Both => ReportFormat::Both,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bom_model::SheetSelector;
    use std::path::PathBuf;

    fn args() -> ProcessArgs {
        ProcessArgs {
            file: PathBuf::from("BOM Only.xlsx"),
            sheet: None,
            indicator_rows: None,
            output_dir: None,
            format: None,
            dry_run: false,
            no_enrich: false,
            strict: false,
            config: None,
        }
    }

    #[test]
    fn test_defaults_without_flags() {
        let (pipeline, report) = resolve_options(&args(), BomConfig::default());
        assert_eq!(pipeline, PipelineOptions::default());
        assert_eq!(report, ReportOptions::default());
    }

    #[test]
    fn test_flags_override_config() {
        let config = BomConfig::from_toml_str(
            r#"
            [pipeline]
            sheet = "Cover"
            indicator_rows = 3

            [report]
            output_dir = "from-config"
            format = "json"
            "#,
        )
        .unwrap();
        let mut args = args();
        args.sheet = Some(SheetSelector::Name("BOM".to_string()));
        args.format = Some(OutputFormatArg::Both);

        let (pipeline, report) = resolve_options(&args, config);
        assert_eq!(pipeline.sheet, SheetSelector::Name("BOM".to_string()));
        assert_eq!(pipeline.indicator_rows, 3);
        assert_eq!(report.output_dir, PathBuf::from("from-config"));
        assert_eq!(report.format, ReportFormat::Both);
    }
}
