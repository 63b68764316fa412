use bom_model::{CanonicalRow, ParsedDescription, PartType, RequiredInputs, SubCategory};
use bom_validate::{CheckedField, CompletenessSummary, identify_missing_info};
use proptest::prelude::*;

fn capacitor_without_mpn() -> CanonicalRow {
    let mut row = CanonicalRow::new(
        RequiredInputs {
            source_row: 4,
            find_number: "3".to_string(),
            manufacturer_part_number: String::new(),
            quantity: 2.0,
            description: "capacitor ceramic 10uF 16V".to_string(),
            drawing_ref: "C1,C2".to_string(),
        },
        ParsedDescription {
            part_type: PartType::Capacitor,
            sub_category: Some(SubCategory::Ceramic),
            value: Some(1e-5),
            tolerance: None,
            voltage: Some(16.0),
        },
    );
    row.manufacturer_part_number = None;
    row
}

#[test]
fn capacitor_reports_mpn_and_tolerance() {
    let annotated = identify_missing_info(&[capacitor_without_mpn()]);
    assert_eq!(
        annotated[0].missing_fields,
        "ManufacturerPartNumber, Tolerance"
    );
}

#[test]
fn ic_with_same_gaps_does_not_report_tolerance() {
    let mut row = capacitor_without_mpn();
    row.part_type = PartType::Ic;
    row.sub_category = None;
    let annotated = identify_missing_info(&[row]);
    assert_eq!(annotated[0].missing_fields, "ManufacturerPartNumber");
}

#[test]
fn annotation_is_idempotent_and_keeps_order() {
    let mut complete = capacitor_without_mpn();
    complete.manufacturer_part_number = Some("GRM21".to_string());
    complete.tolerance = Some(10.0);
    complete.find_number = "1".to_string();
    let rows = vec![complete, capacitor_without_mpn()];

    let once = identify_missing_info(&rows);
    let twice = identify_missing_info(&once);
    assert_eq!(once, twice);
    assert_eq!(once[0].find_number, "1");
    assert!(once[0].is_complete());
    assert!(!once[1].is_complete());
    assert_eq!(rows[1].missing_fields, "", "input must not be modified");
}

#[test]
fn summary_counts() {
    let mut ic = capacitor_without_mpn();
    ic.part_type = PartType::Ic;
    let rows = identify_missing_info(&[capacitor_without_mpn(), ic]);
    let summary = CompletenessSummary::from_rows(&rows);

    assert_eq!(summary.total_rows, 2);
    assert_eq!(summary.incomplete_rows(), 2);
    assert_eq!(summary.missing_count(CheckedField::ManufacturerPartNumber), 2);
    assert_eq!(summary.missing_count(CheckedField::Tolerance), 1);
    assert_eq!(
        summary.part_types,
        vec![(PartType::Capacitor, 1), (PartType::Ic, 1)]
    );
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["complete_rows"], 0);
}

fn part_type() -> impl Strategy<Value = PartType> {
    proptest::sample::select(PartType::ALL.to_vec())
}

proptest! {
    #[test]
    fn tolerance_listed_only_for_resistors_and_capacitors(
        part_type in part_type(),
        tolerance in proptest::option::of(0.1f64..20.0),
    ) {
        let mut row = capacitor_without_mpn();
        row.part_type = part_type;
        row.tolerance = tolerance;
        let annotated = identify_missing_info(&[row]);
        let lists_tolerance = annotated[0].missing_fields.contains("Tolerance");
        prop_assert_eq!(lists_tolerance, part_type.requires_tolerance() && tolerance.is_none());
    }
}
