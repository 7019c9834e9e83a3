/// Reverse the decimal digits of n, or None if the reversal does not fit in u64.
///
/// Example: reverse_digits(1230) = Some(321)
pub fn reverse_digits(mut n: u64) -> Option<u64> {
    let mut reversed: u64 = 0;
    while n > 0 {
        reversed = reversed.checked_mul(10)?.checked_add(n % 10)?;
        n /= 10;
    }
    Some(reversed)
}

/// True if the decimal representation of n reads the same in both directions.
///
/// A palindrome reverses to itself, so an overflowing reversal is never one.
pub fn is_palindrome(n: u64) -> bool {
    reverse_digits(n) == Some(n)
}
