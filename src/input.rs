//! Permissive parsing of user-entered values
//!
//! Text fields never fail to parse: anything that is not a number falls back
//! to a neutral default, the way a form input would. Range checks happen
//! later in the estimator.

use crate::error::EstimateError;
use crate::pricing::MachineUsage;

/// Parse a decimal field, taking the longest numeric prefix
///
/// Empty, non-numeric or NaN input yields 0.
pub fn parse_decimal(text: &str) -> f64 {
    let text = text.trim();

    let boundaries = text
        .char_indices()
        .map(|(idx, ch)| idx + ch.len_utf8())
        .rev();

    for end in boundaries {
        if let Ok(value) = text[..end].parse::<f64>() {
            // Rust accepts "inf"/"nan" spellings; only digits count as numbers here
            if value.is_nan() || !text[..end].chars().any(|c| c.is_ascii_digit()) {
                break;
            }
            return value;
        }
    }

    0.0
}

/// Parse a unit count from its leading integer part
///
/// Empty, non-numeric, zero or negative input yields 1.
pub fn parse_unit_count(text: &str) -> u32 {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first().copied() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if negative || digits.is_empty() {
        return 1;
    }

    match digits.parse::<u32>() {
        Ok(0) => 1,
        Ok(count) => count,
        // More digits than fit; saturate
        Err(_) => u32::MAX,
    }
}

/// Parse a `NAME=MINUTES` machine usage argument
///
/// The name is not checked against the catalog; the estimator reports
/// unknown machines. Minutes are coerced with [`parse_decimal`].
pub fn parse_machine_usage(text: &str) -> Result<MachineUsage, EstimateError> {
    let (name, minutes) = text
        .rsplit_once('=')
        .ok_or_else(|| EstimateError::MalformedUsage(text.to_string()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(EstimateError::MalformedUsage(text.to_string()));
    }

    Ok(MachineUsage::new(name, parse_decimal(minutes)))
}
