//! Darts scoring.

const INNER_RADIUS: f64 = 1.0;
const MIDDLE_RADIUS: f64 = 5.0;
const OUTER_RADIUS: f64 = 10.0;

/// Scores a dart landing at `(x, y)` on a board centered at the origin.
///
/// | Distance from center | Points |
/// |----------------------|--------|
/// | `<= 1`               | 10     |
/// | `<= 5`               | 5      |
/// | `<= 10`              | 1      |
/// | otherwise            | 0      |
pub fn score(x: f64, y: f64) -> u8 {
    let distance = x.hypot(y);

    if distance <= INNER_RADIUS {
        10
    } else if distance <= MIDDLE_RADIUS {
        5
    } else if distance <= OUTER_RADIUS {
        1
    } else {
        0
    }
}
