//! Prime number utilities: an incremental prime iterator, trial-division
//! primality and largest-prime-factor search.

/// Iterator that generates prime numbers.
///
/// Each candidate is trial-divided by the primes found so far; a candidate
/// with no divisor among them is prime and is remembered for later candidates.
///
/// # Example
///
/// ```
/// use math::prime::Primes;
///
/// let first_ten: Vec<u64> = Primes::new().take(10).collect();
/// assert_eq!(first_ten, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// ```
pub struct Primes {
    found: Vec<u64>,
    candidate: u64,
}

impl Primes {
    pub fn new() -> Self {
        Primes {
            found: Vec::new(),
            candidate: 2,
        }
    }

    /// Primes produced so far, in increasing order.
    pub fn found(&self) -> &[u64] {
        &self.found
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.candidate;
            self.candidate = c.checked_add(1)?;

            // Any composite c has a prime factor p with p * p <= c, so the
            // scan over found primes can stop there.
            let is_prime = self
                .found
                .iter()
                .take_while(|&&p| p * p <= c)
                .all(|&p| !c.is_multiple_of(p));

            if is_prime {
                self.found.push(c);
                return Some(c);
            }
        }
    }
}

/// Returns an iterator over prime numbers: 2, 3, 5, 7, 11, ...
///
/// # Example
///
/// ```
/// use math::prime::primes;
///
/// let first_five: Vec<u64> = primes().take(5).collect();
/// assert_eq!(first_five, vec![2, 3, 5, 7, 11]);
/// ```
pub fn primes() -> Primes {
    Primes::new()
}

/// Returns the nth prime number (1-indexed: nth_prime(1) = 2, nth_prime(2) = 3, ...).
///
/// Returns None if n is 0.
///
/// # Example
///
/// ```
/// use math::prime::nth_prime;
///
/// assert_eq!(nth_prime(1), Some(2));
/// assert_eq!(nth_prime(6), Some(13));
/// assert_eq!(nth_prime(0), None);
/// ```
pub fn nth_prime(n: usize) -> Option<u64> {
    if n == 0 {
        return None;
    }
    Primes::new().nth(n - 1)
}

/// Smallest integer r with r * r >= n.
pub fn ceil_sqrt(n: u64) -> u64 {
    let r = n.isqrt();
    if r * r == n { r } else { r + 1 }
}

/// Check if a number is prime by trial division up to ⌈√n⌉.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let limit = ceil_sqrt(n);
    (2..=limit).take_while(|&d| d < n).all(|d| !n.is_multiple_of(d))
}

/// Returns the largest prime factor of n.
///
/// A prime n is its own answer, and a prime cofactor n / d above ⌈√n⌉ wins
/// when one exists. Otherwise candidate divisors are scanned downward from
/// ⌈√n⌉ and the first one that divides n and is prime is returned.
///
/// Returns None if n < 2.
///
/// # Example
///
/// ```
/// use math::prime::largest_prime_factor;
///
/// assert_eq!(largest_prime_factor(13195), Some(29));
/// assert_eq!(largest_prime_factor(2), Some(2));
/// assert_eq!(largest_prime_factor(1), None);
/// ```
pub fn largest_prime_factor(n: u64) -> Option<u64> {
    if n < 2 {
        return None;
    }
    if is_prime(n) {
        return Some(n);
    }

    let root = ceil_sqrt(n);

    // At most one prime factor exceeds the root; if it exists it is the answer.
    let cofactor = (2..=root)
        .filter(|&d| n.is_multiple_of(d))
        .map(|d| n / d)
        .filter(|&c| c > root)
        .find(|&c| is_prime(c));
    if cofactor.is_some() {
        return cofactor;
    }

    (2..=root)
        .rev()
        .find(|&d| n.is_multiple_of(d) && is_prime(d))
}
