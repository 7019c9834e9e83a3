use math::Fibonacci;

const LIMIT: u64 = 4_000_000;

/// PE2: Even Fibonacci Numbers
/// Sum all even-valued terms of 1, 2, 3, 5, 8, ... that do not exceed four million.
pub fn solve() -> u64 {
    Fibonacci::with_start(1, 2)
        .take_while(|&n| n <= LIMIT)
        .filter(|n| n % 2 == 0)
        .sum()
}
