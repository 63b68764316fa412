//! Enriched rows as a polars data table.

use bom_enrich::EnrichedRow;
use polars::prelude::*;

/// Columns appended after the canonical columns.
pub const ENRICHMENT_COLUMNS: [&str; 4] = [
    "MilHdbkSection",
    "BaseFailureRate",
    "QualityFactor",
    "EnvironmentalFactor",
];

fn text_column<'a>(
    name: &str,
    rows: &'a [EnrichedRow],
    value: impl Fn(&'a EnrichedRow) -> &'a str,
) -> Column {
    Series::new(name.into(), rows.iter().map(value).collect::<Vec<&str>>()).into()
}

fn optional_text_column<'a>(
    name: &str,
    rows: &'a [EnrichedRow],
    value: impl Fn(&'a EnrichedRow) -> Option<&'a str>,
) -> Column {
    Series::new(name.into(), rows.iter().map(value).collect::<Vec<_>>()).into()
}

fn number_column(
    name: &str,
    rows: &[EnrichedRow],
    value: impl Fn(&EnrichedRow) -> Option<f64>,
) -> Column {
    Series::new(name.into(), rows.iter().map(value).collect::<Vec<_>>()).into()
}

/// Builds the report data table: canonical columns, then enrichment columns.
///
/// An unknown part type is written as null.
pub fn to_dataframe(rows: &[EnrichedRow]) -> PolarsResult<DataFrame> {
    let quantities: Vec<f64> = rows.iter().map(|r| r.row.quantity).collect();
    let source_rows: Vec<u64> = rows.iter().map(|r| r.row.source_row as u64).collect();

    DataFrame::new(vec![
        text_column("FN", rows, |r| r.row.find_number.as_str()),
        optional_text_column("ManufacturerPartNumber", rows, |r| {
            r.row.manufacturer_part_number.as_deref()
        }),
        Series::new("Quantity".into(), quantities).into(),
        text_column("Description", rows, |r| r.row.description.as_str()),
        text_column("DrawingRef", rows, |r| r.row.drawing_ref.as_str()),
        optional_text_column("PartType", rows, |r| {
            r.row.part_type.is_known().then_some(r.row.part_type.as_str())
        }),
        optional_text_column("SubCategory", rows, |r| {
            r.row.sub_category.map(|s| s.as_str())
        }),
        number_column("Value", rows, |r| r.row.value),
        number_column("Tolerance", rows, |r| r.row.tolerance),
        number_column("Voltage", rows, |r| r.row.voltage),
        text_column("AdditionalInfo", rows, |r| r.row.additional_info.as_str()),
        text_column("MissingFields", rows, |r| r.row.missing_fields.as_str()),
        Series::new("SourceRow".into(), source_rows).into(),
        optional_text_column("MilHdbkSection", rows, |r| r.section.as_deref()),
        number_column("BaseFailureRate", rows, |r| r.base_failure_rate),
        number_column("QualityFactor", rows, |r| r.quality_factor),
        number_column("EnvironmentalFactor", rows, |r| r.environmental_factor),
    ])
}

/// Sum of `BaseFailureRate`, treating unset rates as zero.
pub fn total_base_failure_rate(rows: &[EnrichedRow]) -> f64 {
    rows.iter().filter_map(|r| r.base_failure_rate).sum()
}
