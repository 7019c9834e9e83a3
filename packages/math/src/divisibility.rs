pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Least common multiple, or None if it does not fit in u64.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// True if every divisor in `divisors` divides n evenly.
///
/// # Example
///
/// ```
/// use math::divisibility::divisible_by_all;
///
/// assert!(divisible_by_all(2520, 1..=10));
/// assert!(!divisible_by_all(2520, 1..=11));
/// ```
pub fn divisible_by_all<I>(n: u64, divisors: I) -> bool
where
    I: IntoIterator<Item = u64>,
{
    divisors.into_iter().all(|d| n.is_multiple_of(d))
}
