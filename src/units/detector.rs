use crate::error::CapError;
use crate::locale::{InputKind, LocaleFormat};
use crate::units::types::Unit;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect capacitance strings
    /// Matches: number (digits with '.', ',', '\'' or no-break-space separators, optional
    /// scientific notation) + optional whitespace + unit symbol
    /// Examples: "100nF", "4.7 uF", "4,7uF", "1,000 pF", "1e3 pF", "-2 mF", "22 µF"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(?P<value>[-+]?\d[\d.,'\x{A0}]*(?:[eE][-+]?\d+)?)\s*(?P<unit>[npumµμ][Ff]?)$"
    ).unwrap();
}

/// Check if a string looks like a capacitance with a unit suffix
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}

/// Split "4.7uF" into (4.7, Unit::Micro).
///
/// The number is read with the same locale rules as a typed field, so "4,7uF"
/// means 4.7 under a decimal-comma locale and 47 where ',' groups digits.
pub fn parse_quantity(s: &str, locale: &LocaleFormat) -> Result<(f64, Unit), CapError> {
    let trimmed = s.trim();
    let caps = QUANTITY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| CapError::UnparsableInput(s.to_string()))?;

    // The locale parser only knows the 'E' exponent marker
    let number = caps["value"].replace('e', "E");
    let value = match locale.classify_input(&number) {
        InputKind::Number(v) => v,
        InputKind::Incomplete | InputKind::Unparsable => {
            return Err(CapError::UnparsableInput(s.to_string()))
        }
    };
    let unit = caps["unit"].parse::<Unit>()?;

    Ok((value, unit))
}
