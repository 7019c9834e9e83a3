/// PE1: Multiples of 3 or 5
/// Sum all natural numbers below 1000 that are multiples of 3 or 5.
pub fn solve() -> u64 {
    let mut sum = 0;
    for i in 1..1000 {
        if i % 3 == 0 || i % 5 == 0 {
            sum += i;
        }
    }
    sum
}
