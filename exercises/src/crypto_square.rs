//! Crypto square cipher.

const PADDING: char = ' ';

/// Encodes `plaintext` with the crypto square cipher.
///
/// The text is normalized to lowercase letters and digits, laid out row by
/// row in the smallest near-square grid with `columns >= rows`, and read
/// back column by column. Columns are padded with spaces to equal length
/// and joined with a single space.
pub fn encrypt(plaintext: &str) -> String {
    let normalized: Vec<char> = plaintext
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    if normalized.is_empty() {
        return String::new();
    }

    let columns = (normalized.len() as f64).sqrt().ceil() as usize;
    let rows = normalized.len().div_ceil(columns);

    let chunks: Vec<String> = (0..columns)
        .map(|col| {
            (0..rows)
                .map(|row| normalized.get(row * columns + col).copied().unwrap_or(PADDING))
                .collect()
        })
        .collect();

    chunks.join(" ")
}
