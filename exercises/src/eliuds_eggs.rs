//! Eliud's eggs: count the set bits of a display value.

/// Returns the number of eggs (1 bits) encoded in `display_value`.
pub fn egg_count(display_value: u32) -> u32 {
    display_value.count_ones()
}
