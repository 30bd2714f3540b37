//! Two-fer greeting.

/// Returns "One for {name}, one for me.", with `name` defaulting to "you".
pub fn two_fer(name: Option<&str>) -> String {
    format!("One for {}, one for me.", name.unwrap_or("you"))
}
