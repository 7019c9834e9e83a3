/// Iterator that generates Fibonacci numbers.
///
/// Iteration ends instead of wrapping once the next term would overflow u64.
///
/// # Example
///
/// ```
/// use math::fibonacci::Fibonacci;
///
/// // Get first 10 Fibonacci numbers
/// let fibs: Vec<u64> = Fibonacci::new().take(10).collect();
/// assert_eq!(fibs, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
/// ```
pub struct Fibonacci {
    curr: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self::with_start(1, 1)
    }

    /// Start with custom initial values (a, b) where the sequence is a, b, a+b, ...
    pub fn with_start(a: u64, b: u64) -> Self {
        Fibonacci {
            curr: Some(a),
            next: Some(b),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr?;
        self.curr = self.next;
        self.next = self.next.and_then(|n| n.checked_add(curr));
        Some(curr)
    }
}

/// Returns an iterator over Fibonacci numbers starting with 1, 1, 2, 3, 5, ...
///
/// # Example
///
/// ```
/// use math::fibonacci::fibonacci;
///
/// let first_five: Vec<u64> = fibonacci().take(5).collect();
/// assert_eq!(first_five, vec![1, 1, 2, 3, 5]);
/// ```
pub fn fibonacci() -> Fibonacci {
    Fibonacci::new()
}
