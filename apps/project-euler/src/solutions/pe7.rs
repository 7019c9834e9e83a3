use math::nth_prime;

const INDEX: usize = 10_001;

/// PE7: 10001st Prime
/// Find the 10001st prime number.
pub fn solve() -> u64 {
    nth_prime(INDEX).expect("prime index is 1-based and non-zero")
}
