use math::divisible_by_all;

/// Smallest number divisible by each of 1..=10.
const LCM_TO_TEN: u64 = 2520;

/// PE5: Smallest Multiple
/// Find the smallest positive number evenly divisible by all numbers from 1 to 20.
///
/// Any such number is also a multiple of 2520, so the scan walks the
/// multiples of 2520 and only needs to check the divisors 11..=20.
pub fn solve() -> u64 {
    (LCM_TO_TEN..)
        .step_by(LCM_TO_TEN as usize)
        .find(|&n| divisible_by_all(n, 11..=20))
        .expect("scan over multiples of 2520 is unbounded")
}
