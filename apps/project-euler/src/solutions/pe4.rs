use math::is_palindrome;
use tracing::debug;

/// PE4: Largest Palindrome Product
/// Find the largest palindrome made from the product of two 3-digit numbers.
pub fn solve() -> u64 {
    largest_palindrome_product(100..1000)
}

/// Largest palindromic a * b with a and b both drawn from `factors`, or 0 if none.
fn largest_palindrome_product(factors: std::ops::Range<u64>) -> u64 {
    let mut largest = 0;

    for a in factors.clone() {
        // a * b == b * a, so only pairs with b >= a need checking.
        for b in a..factors.end {
            let product = a * b;
            if product > largest && is_palindrome(product) {
                debug!(a, b, product, "new largest palindrome");
                largest = product;
            }
        }
    }
    largest
}
