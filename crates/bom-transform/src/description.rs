//! Free-text part description parsing.
//!
//! Classification uses a fixed keyword priority: resistor, capacitor,
//! integrated circuit, inductor, connector. The first keyword present wins.

use std::sync::LazyLock;

use bom_model::{CellValue, ParsedDescription, PartType, SubCategory};
use regex::Regex;

use crate::units::{convert_value, round_sig};

/// First number with an optional value suffix, e.g. `1k`, `10uF`, `100 pF`.
static VALUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+\.?[0-9]*\s*(?:[kK]|M|m|[uU]F|[pP]F)?)").expect("Invalid value regex")
});

static TOLERANCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"±?\s*([0-9]+\.?[0-9]*)\s*%").expect("Invalid tolerance regex")
});

static VOLTAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+\.?[0-9]*\s*(?:V|volts))").expect("Invalid voltage regex")
});

/// `ic` as a whole word, matched against lowercased text.
static IC_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bic\b").expect("Invalid IC regex"));

/// Parses a description cell. Cells that are not text parse as unknown.
pub fn parse_description_cell(cell: &CellValue, significant_digits: u32) -> ParsedDescription {
    match cell {
        CellValue::Text(text) => parse_description(text, significant_digits),
        _ => ParsedDescription::unknown(),
    }
}

/// Extracts part type, sub-category, value, tolerance and voltage.
///
/// Never fails; anything that cannot be extracted is left unset.
pub fn parse_description(description: &str, significant_digits: u32) -> ParsedDescription {
    let lower = description.to_lowercase();
    let part_type = classify(&lower);
    let sub_category = match part_type {
        PartType::Capacitor => capacitor_dielectric(&lower),
        _ => None,
    };
    let tolerance = if part_type.requires_tolerance() {
        extract_tolerance(description).map(|t| round_sig(t, significant_digits))
    } else {
        None
    };

    ParsedDescription {
        part_type,
        sub_category,
        value: extract_value(description).map(|v| round_sig(v, significant_digits)),
        tolerance,
        voltage: extract_voltage(description).map(|v| round_sig(v, significant_digits)),
    }
}

fn classify(lower: &str) -> PartType {
    if lower.contains("resistor") {
        PartType::Resistor
    } else if lower.contains("capacitor") {
        PartType::Capacitor
    } else if lower.contains("integrated circuit") || IC_WORD_REGEX.is_match(lower) {
        PartType::Ic
    } else if lower.contains("inductor") || lower.contains("coil") {
        PartType::Inductor
    } else if lower.contains("connector") {
        PartType::Connector
    } else {
        PartType::Other
    }
}

fn capacitor_dielectric(lower: &str) -> Option<SubCategory> {
    if lower.contains("ceramic") {
        Some(SubCategory::Ceramic)
    } else if lower.contains("tantalum") {
        Some(SubCategory::Tantalum)
    } else {
        None
    }
}

fn extract_value(description: &str) -> Option<f64> {
    let token = VALUE_REGEX.find(description)?.as_str().trim();
    match convert_value(token) {
        Ok(value) => Some(value),
        Err(failure) => {
            tracing::trace!(%failure, "value token not converted");
            None
        }
    }
}

fn extract_tolerance(description: &str) -> Option<f64> {
    let captures = TOLERANCE_REGEX.captures(description)?;
    captures[1].parse().ok()
}

fn extract_voltage(description: &str) -> Option<f64> {
    let token = VOLTAGE_REGEX.find(description)?.as_str();
    let digits: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bom_model::DEFAULT_SIGNIFICANT_DIGITS;
    use proptest::prelude::*;

    fn parse(text: &str) -> ParsedDescription {
        parse_description(text, DEFAULT_SIGNIFICANT_DIGITS)
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("value should be set");
        assert!(
            (actual - expected).abs() <= expected.abs() * 1e-12,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn test_resistor() {
        let parsed = parse("1k resistor ±5% 5V");
        assert_eq!(parsed.part_type, PartType::Resistor);
        assert_eq!(parsed.sub_category, None);
        assert_close(parsed.value, 1000.0);
        assert_close(parsed.tolerance, 5.0);
        assert_close(parsed.voltage, 5.0);
    }

    #[test]
    fn test_capacitor() {
        let parsed = parse("10uF capacitor ±10% 12V");
        assert_eq!(parsed.part_type, PartType::Capacitor);
        assert_close(parsed.value, 1e-5);
        assert_close(parsed.tolerance, 10.0);
        assert_close(parsed.voltage, 12.0);
    }

    #[test]
    fn test_capacitor_sub_category() {
        let parsed = parse("CAPACITOR, CERAMIC 100pF 50 VOLTS");
        assert_eq!(parsed.sub_category, Some(SubCategory::Ceramic));
        assert_close(parsed.value, 1e-10);
        assert_close(parsed.voltage, 50.0);
        assert_eq!(parsed.tolerance, None);

        let parsed = parse("Tantalum capacitor 4.7uF");
        assert_eq!(parsed.sub_category, Some(SubCategory::Tantalum));
        assert_close(parsed.value, 4.7e-6);
    }

    #[test]
    fn test_classification_priority() {
        assert_eq!(parse("Resistor network for capacitor").part_type, PartType::Resistor);
        assert_eq!(parse("Integrated Circuit, op amp").part_type, PartType::Ic);
        assert_eq!(parse("IC, LDO 3.3V").part_type, PartType::Ic);
        assert_eq!(parse("Picture frame").part_type, PartType::Other);
        assert_eq!(parse("Choke coil 10uH").part_type, PartType::Inductor);
        assert_eq!(parse("Connector, 9 pin").part_type, PartType::Connector);
    }

    #[test]
    fn test_tolerance_only_for_resistors_and_capacitors() {
        let parsed = parse("IC regulator 5% 3.3V");
        assert_eq!(parsed.part_type, PartType::Ic);
        assert_eq!(parsed.tolerance, None);
        assert_close(parsed.voltage, 3.3);
    }

    #[test]
    fn test_rounding_applied() {
        let parsed = parse("Resistor 12.345678k 0.12345% 100.456V");
        assert_close(parsed.value, 12350.0);
        assert_close(parsed.tolerance, 0.1235);
        assert_close(parsed.voltage, 100.5);
    }

    #[test]
    fn test_tolerance_tie_rounds_like_exact_value() {
        let parsed = parse("Resistor 1k ±1.2345% 50V");
        assert_eq!(parsed.tolerance, Some(1.234));
    }

    #[test]
    fn test_large_significant_digits_keep_values() {
        let parsed = parse_description("1k resistor ±5% 5V", 400);
        assert_eq!(parsed.value, Some(1000.0));
        assert_eq!(parsed.tolerance, Some(5.0));
        assert_eq!(parsed.voltage, Some(5.0));
    }

    #[test]
    fn test_nothing_recognized() {
        let parsed = parse("Bracket");
        assert_eq!(parsed.part_type, PartType::Other);
        assert_eq!(parsed.value, None);
        assert_eq!(parsed.voltage, None);
        assert!(parsed.is_unrecognized());
    }

    #[test]
    fn test_non_text_cell_is_unknown() {
        let parsed = parse_description_cell(&CellValue::Number(42.0), DEFAULT_SIGNIFICANT_DIGITS);
        assert_eq!(parsed, ParsedDescription::unknown());
        let parsed = parse_description_cell(&CellValue::from("1k resistor"), 4);
        assert_eq!(parsed.part_type, PartType::Resistor);
    }

    proptest! {
        #[test]
        fn no_keyword_means_other(text in "[a-h j-z0-9 ,.%]{0,40}") {
            let lower = text.to_lowercase();
            prop_assume!(!lower.contains("resistor")
                && !lower.contains("capacitor")
                && !lower.contains("integrated circuit")
                && !IC_WORD_REGEX.is_match(&lower)
                && !lower.contains("inductor")
                && !lower.contains("coil")
                && !lower.contains("connector"));
            let parsed = parse(&text);
            prop_assert_eq!(parsed.part_type, PartType::Other);
            prop_assert_eq!(parsed.sub_category, None);
            prop_assert_eq!(parsed.tolerance, None);
        }
    }
}
