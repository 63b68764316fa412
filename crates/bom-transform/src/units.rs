//! Unit suffixes and significant-figure rounding.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// A whole token: number, optional whitespace, optional letter suffix.
static VALUE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+\.?[0-9]*)\s*([A-Za-zµ]*)$").expect("Invalid value token regex")
});

/// The token could not be read as a number with a unit suffix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert '{token}' to a value")]
pub struct ParseFailure {
    pub token: String,
}

/// Multiplier for a unit suffix. Unrecognized suffixes scale by 1.
pub fn unit_multiplier(unit: &str) -> f64 {
    match unit {
        "" => 1.0,
        "k" | "K" => 1e3,
        "M" => 1e6,
        "m" => 1e-3,
        "uF" | "UF" | "µF" => 1e-6,
        _ if unit.eq_ignore_ascii_case("pf") => 1e-12,
        _ => 1.0,
    }
}

/// Converts a token such as `"10uF"` or `"4.7 k"` to base units.
pub fn convert_value(token: &str) -> Result<f64, ParseFailure> {
    let failure = || ParseFailure {
        token: token.to_string(),
    };
    let captures = VALUE_TOKEN_REGEX.captures(token.trim()).ok_or_else(failure)?;
    let number: f64 = captures[1].parse().map_err(|_| failure())?;
    Ok(number * unit_multiplier(&captures[2]))
}

/// Decimal places beyond which every finite `f64` is already exact.
const MAX_ROUNDING_DECIMALS: i64 = 323;

/// Largest power of ten an `f64` can hold.
const MAX_POWER_OF_TEN: i64 = 308;

/// Rounds to `digits` significant figures, ties to even on the exact binary
/// value. Zero stays zero.
pub fn round_sig(value: f64, digits: u32) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    if !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i64;
    let decimals = i64::from(digits) - magnitude - 1;
    if decimals > MAX_ROUNDING_DECIMALS {
        value
    } else if decimals >= 0 {
        // The formatter rounds the exact value, not a scaled product.
        format!("{value:.prec$}", prec = decimals as usize)
            .parse()
            .unwrap_or(value)
    } else if -decimals > MAX_POWER_OF_TEN {
        0.0_f64.copysign(value)
    } else {
        let factor = 10f64.powi(-decimals as i32);
        (value / factor).round_ties_even() * factor
    }
}
