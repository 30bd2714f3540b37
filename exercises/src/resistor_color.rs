//! Resistor color duo decoding.

use crate::error::ExerciseError;

/// Band colors in value order: `black` is 0, `white` is 9.
pub const COLORS: [&str; 10] = [
    "black", "brown", "red", "orange", "yellow", "green", "blue", "violet", "grey", "white",
];

/// Returns the digit for a single band color (case-insensitive).
pub fn color_code(color: &str) -> Result<u8, ExerciseError> {
    let lower = color.to_lowercase();
    COLORS
        .iter()
        .position(|c| *c == lower)
        .map(|i| i as u8)
        .ok_or_else(|| ExerciseError::InvalidColor(color.to_string()))
}

/// Decodes the two-digit value of the first two bands.
///
/// Bands after the second are ignored.
pub fn decoded_value<S: AsRef<str>>(colors: &[S]) -> Result<u8, ExerciseError> {
    match colors {
        [first, second, ..] => {
            Ok(color_code(first.as_ref())? * 10 + color_code(second.as_ref())?)
        }
        _ => Err(ExerciseError::NotEnoughColors),
    }
}
