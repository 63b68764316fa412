//! End-to-end runs of the pipeline stages over CSV fixtures.

use std::path::{Path, PathBuf};

use bom_cli::config::BomConfig;
use bom_cli::pipeline::{check_completeness, enrich_rows, process_bom};
use bom_enrich::{PartInfoLookup, PlaceholderLookup};
use bom_map::MapError;
use bom_model::{Diagnostic, Diagnostics, DroppedRow, InputColumn, PartType, PipelineOptions};
use bom_report::{ReportFormat, ReportOptions, ReportSummary, write_report};
use tempfile::TempDir;

const BOM_CSV: &str = "BOM Only,,,,\n\
Find No.,Mfg Part,Qty,Desc,Drawing\n\
1,RC0603FR-0710KL,10,1k resistor ±5% 5V,R1\n\
2,GRM188,4,10uF capacitor 12V,C1\n\
3,,1,Connector 9 pin,J1\n\
,,,,\n\
4,LM317,1,IC regulator 3.3V,U1\n";

fn write_bom(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn run(path: &Path) -> (bom_model::BomTable, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let bom = process_bom(path, &PipelineOptions::default(), &mut diagnostics).unwrap();
    (bom, diagnostics)
}

#[test]
fn indicator_row_and_header_variants() {
    let dir = TempDir::new().unwrap();
    let path = write_bom(&dir, "bom.csv", BOM_CSV);
    let (bom, diagnostics) = run(&path);

    let find_numbers: Vec<_> = bom.rows.iter().map(|r| r.find_number.as_str()).collect();
    assert_eq!(find_numbers, vec!["1", "2", "4"]);
    assert_eq!(
        bom.dropped,
        vec![DroppedRow {
            row_number: 5,
            missing: vec![InputColumn::ManufacturerPartNumber],
        }]
    );
    assert!(
        diagnostics
            .events()
            .iter()
            .any(|d| matches!(d, Diagnostic::RowDropped { row_number: 5, .. }))
    );

    let resistor = &bom.rows[0];
    assert_eq!(resistor.part_type, PartType::Resistor);
    assert_eq!(resistor.value, Some(1000.0));
    assert_eq!(resistor.tolerance, Some(5.0));
    assert_eq!(resistor.voltage, Some(5.0));
    assert_eq!(resistor.quantity, 10.0);
    assert_eq!(resistor.source_row, 3);
    assert_eq!(bom.rows[2].part_type, PartType::Ic);
}

#[test]
fn missing_column_fails_before_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_bom(
        &dir,
        "bom.csv",
        "BOM Only,,,\nFind No.,Mfg Part,Desc,Drawing\n1,X,1k resistor,R1\n",
    );
    let mut diagnostics = Diagnostics::new();
    let err = process_bom(&path, &PipelineOptions::default(), &mut diagnostics).unwrap_err();

    match err.downcast_ref::<MapError>() {
        Some(MapError::MissingColumn { column, .. }) => {
            assert_eq!(*column, InputColumn::Quantity)
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(diagnostics.is_empty());
}

#[test]
fn completeness_and_enrichment() {
    let dir = TempDir::new().unwrap();
    let path = write_bom(&dir, "bom.csv", BOM_CSV);
    let (bom, _) = run(&path);

    let (rows, completeness) = check_completeness(&bom.rows);
    assert_eq!(rows[0].missing_fields, "");
    assert_eq!(rows[1].missing_fields, "Tolerance");
    assert_eq!(rows[2].missing_fields, "");
    assert_eq!(completeness.incomplete_rows(), 1);

    let lookup = PlaceholderLookup::default();
    let enriched = enrich_rows(rows.clone(), Some(&lookup as &dyn PartInfoLookup)).unwrap();
    assert_eq!(enriched[0].section.as_deref(), Some("9 RESISTORS"));
    assert_eq!(enriched[1].section.as_deref(), Some("10 CAPACITORS"));
    assert!(enriched.iter().all(|r| r.base_failure_rate == Some(0.0015)));

    let bare = enrich_rows(rows, None).unwrap();
    assert_eq!(bare[2].section.as_deref(), Some("5 MICROCIRCUITS"));
    assert!(bare.iter().all(|r| r.base_failure_rate.is_none()));
}

#[test]
fn report_written_to_output_dir() {
    let dir = TempDir::new().unwrap();
    let path = write_bom(&dir, "bom.csv", BOM_CSV);
    let (bom, _) = run(&path);
    let (rows, completeness) = check_completeness(&bom.rows);
    let lookup = PlaceholderLookup::default();
    let rows = enrich_rows(rows, Some(&lookup as &dyn PartInfoLookup)).unwrap();

    let options = ReportOptions::default()
        .with_output_dir(dir.path().join("out"))
        .with_format(ReportFormat::Both);
    let summary = ReportSummary::new(&path, &rows, bom.dropped.len(), &completeness);
    let paths = write_report(&rows, &summary, &options).unwrap();
    assert_eq!(paths.written().len(), 3);

    let summary_csv = std::fs::read_to_string(options.summary_path()).unwrap();
    let mut lines = summary_csv.lines();
    assert_eq!(lines.next(), Some("Metric,Value"));
    assert!(
        lines
            .next()
            .unwrap()
            .starts_with("Total Base Failure Rate,0.004")
    );
    assert!(summary_csv.contains("Rows Dropped,1"));

    let data_csv = std::fs::read_to_string(options.data_path()).unwrap();
    assert_eq!(data_csv.lines().count(), 4);
    assert!(data_csv.lines().next().unwrap().starts_with("FN,"));
}

#[test]
fn config_extra_variants_reach_the_normalizer() {
    let dir = TempDir::new().unwrap();
    let path = write_bom(
        &dir,
        "bom.csv",
        "x\nLine,MPN,Pcs Req'd,Description,Ref Des\n1,ABC,2,Connector 4 pin,J2\n",
    );
    let config = BomConfig::from_toml_str(
        r#"
        [pipeline.extra_variants]
        FN = ["line"]
        Quantity = ["pcs req'd"]
        "#,
    )
    .unwrap();
    let mut diagnostics = Diagnostics::new();
    let bom = process_bom(&path, &config.pipeline, &mut diagnostics).unwrap();
    assert_eq!(bom.len(), 1);
    assert_eq!(bom.rows[0].quantity, 2.0);
    assert_eq!(bom.rows[0].part_type, PartType::Connector);
}
