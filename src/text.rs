// Text Conversion
// Splits text into per-character numeric units and joins them back

use crate::error::{RsaError, RsaResult};

/// One message unit: the Unicode scalar value of a single character
pub type Unit = u32;

/// String to list of characters
pub fn string_to_chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// List of characters to numeric units
pub fn chars_to_units(chars: &[char]) -> Vec<Unit> {
    chars.iter().map(|&c| Unit::from(c)).collect()
}

/// Numeric units to list of characters
pub fn units_to_chars(units: &[Unit]) -> RsaResult<Vec<char>> {
    units
        .iter()
        .map(|&unit| char::from_u32(unit).ok_or(RsaError::InvalidCodePoint(unit)))
        .collect()
}

/// List of characters to string
pub fn chars_to_string(chars: &[char]) -> String {
    chars.iter().collect()
}

pub fn text_to_units(text: &str) -> Vec<Unit> {
    text.chars().map(Unit::from).collect()
}

/// Exact inverse of [`text_to_units`]
pub fn units_to_text(units: &[Unit]) -> RsaResult<String> {
    units_to_chars(units).map(|chars| chars_to_string(&chars))
}

/// Binary rendering of each unit, without leading zeros
pub fn units_to_binary(units: &[Unit]) -> Vec<String> {
    units.iter().map(|unit| format!("{:b}", unit)).collect()
}
