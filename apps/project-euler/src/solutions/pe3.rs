use math::largest_prime_factor;
use tracing::debug;

const NUMBER: u64 = 600_851_475_143;

/// PE3: Largest Prime Factor
/// Find the largest prime factor of 600851475143.
pub fn solve() -> u64 {
    let factor = largest_prime_factor(NUMBER).expect("numbers above 1 have a prime factor");
    debug!(number = NUMBER, factor, "largest prime factor");
    factor
}
