//! Square of sums versus sum of squares for `1..=n`.
//!
//! Every function returns `None` when the result does not fit in a `u64`.
//! `square_of_sum` is the first to overflow, past `n = 92_681`.

/// Returns `(1 + 2 + ... + n)^2`.
pub fn square_of_sum(n: u64) -> Option<u64> {
    let n = u128::from(n);
    let sum = u64::try_from(n * (n + 1) / 2).ok()?;
    sum.checked_mul(sum)
}

/// Returns `1^2 + 2^2 + ... + n^2`.
pub fn sum_of_squares(n: u64) -> Option<u64> {
    let n = u128::from(n);
    let product = n.checked_mul(n + 1)?.checked_mul(2 * n + 1)?;
    u64::try_from(product / 6).ok()
}

/// Returns `square_of_sum(n) - sum_of_squares(n)`.
pub fn difference(n: u64) -> Option<u64> {
    Some(square_of_sum(n)? - sum_of_squares(n)?)
}
