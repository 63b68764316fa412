//! BOM pipeline stages: ingest, map, transform, validate, enrich.
//!
//! Each stage runs inside its own `info_span!` and logs its duration.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use bom_enrich::{EnrichedRow, PartInfoLookup, attach_sections, enrich};
use bom_ingest::read_bom_table;
use bom_map::{ColumnMapping, ColumnNormalizer};
use bom_model::{BomTable, CanonicalRow, Diagnostics, PipelineOptions, RawTable};
use bom_standards::SectionTable;
use bom_transform::build_canonical_rows;
use bom_validate::{CompletenessSummary, identify_missing_info};

/// Reads the raw table from the selected sheet.
pub fn ingest(path: &Path, options: &PipelineOptions) -> Result<RawTable> {
    let span = info_span!("ingest", path = %path.display(), sheet = %options.sheet);
    let _guard = span.enter();
    let start = Instant::now();
    let table = read_bom_table(path, options).with_context(|| format!("read {}", path.display()))?;
    info!(
        columns = table.width(),
        rows = table.height(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(table)
}

/// Resolves the table's headers to canonical columns.
pub fn map_columns(
    table: &RawTable,
    options: &PipelineOptions,
    diagnostics: &mut Diagnostics,
) -> Result<ColumnMapping> {
    let span = info_span!("map");
    let _guard = span.enter();
    let normalizer = ColumnNormalizer::from_options(options).context("load column variants")?;
    let mapping = normalizer
        .normalize(&table.headers, diagnostics)
        .context("normalize columns")?;
    info!(mapped = mapping.assignments().len(), "columns mapped");
    Ok(mapping)
}

/// Runs the BOM pipeline: read, normalize columns, build canonical rows.
///
/// A missing canonical column fails before any row is processed. Rows with
/// null required inputs are returned in [`BomTable::dropped`].
pub fn process_bom(
    path: &Path,
    options: &PipelineOptions,
    diagnostics: &mut Diagnostics,
) -> Result<BomTable> {
    let table = ingest(path, options)?;
    let mapping = map_columns(&table, options, diagnostics)?;

    let span = info_span!("transform");
    let _guard = span.enter();
    let start = Instant::now();
    let bom = build_canonical_rows(&table, &mapping, options, diagnostics);
    info!(
        kept = bom.rows.len(),
        dropped = bom.dropped.len(),
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    Ok(bom)
}

/// Annotates `MissingFields` and summarizes completeness.
pub fn check_completeness(rows: &[CanonicalRow]) -> (Vec<CanonicalRow>, CompletenessSummary) {
    let span = info_span!("validate");
    let _guard = span.enter();
    let annotated = identify_missing_info(rows);
    let summary = CompletenessSummary::from_rows(&annotated);
    info!(
        rows = summary.total_rows,
        incomplete = summary.incomplete_rows(),
        "completeness checked"
    );
    (annotated, summary)
}

/// Joins reliability figures when a lookup is given; sections are always attached.
pub fn enrich_rows(
    rows: Vec<CanonicalRow>,
    lookup: Option<&dyn PartInfoLookup>,
) -> Result<Vec<EnrichedRow>> {
    let span = info_span!("enrich");
    let _guard = span.enter();
    let sections = SectionTable::load_default().context("load MIL-HDBK-217 sections")?;
    let enriched = match lookup {
        Some(lookup) => enrich(rows, lookup, &sections).context("enrich rows")?,
        None => attach_sections(rows, &sections),
    };
    info!(rows = enriched.len(), enriched = lookup.is_some(), "enrichment complete");
    Ok(enriched)
}
