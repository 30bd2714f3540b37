//! Acronym generation.

/// Builds an acronym from the first letter or digit of every word.
///
/// Words are separated by whitespace or hyphens; punctuation in front of a
/// word is skipped.
pub fn generate(phrase: &str) -> String {
    phrase
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|word| !word.trim().is_empty())
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .collect()
}
