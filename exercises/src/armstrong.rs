//! Armstrong number check.

/// Returns true if `n` equals the sum of its digits, each raised to the
/// number of digits.
pub fn is_armstrong_number(n: u32) -> bool {
    let digits: Vec<u64> = n
        .to_string()
        .bytes()
        .map(|b| u64::from(b - b'0'))
        .collect();
    let power = digits.len() as u32;

    // 9^10 * 10 still fits in u64.
    let sum: u64 = digits.iter().map(|d| d.pow(power)).sum();
    sum == u64::from(n)
}
