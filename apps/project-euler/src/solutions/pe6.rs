/// PE6: Sum Square Difference
/// Find the difference between the square of the sum and the sum of squares
/// for the first 100 natural numbers.
pub fn solve() -> u64 {
    sum_square_difference(100)
}

fn sum_square_difference(n: u64) -> u64 {
    let sum: u64 = (1..=n).sum();
    let sum_of_squares: u64 = (1..=n).map(|i| i * i).sum();
    sum * sum - sum_of_squares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        assert_eq!(solve(), 25164150);
    }

    #[test]
    fn test_first_ten() {
        // 55² - 385 = 2640
        assert_eq!(sum_square_difference(10), 2640);
    }

    #[test]
    fn test_matches_closed_form() {
        let n: u64 = 100;
        let sum = n * (n + 1) / 2;
        let sum_of_squares = n * (n + 1) * (2 * n + 1) / 6;
        assert_eq!(solve(), sum * sum - sum_of_squares);
    }
}
