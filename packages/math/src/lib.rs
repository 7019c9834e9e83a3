pub mod digits;
pub mod divisibility;
pub mod fibonacci;
pub mod prime;
pub mod triangle;

pub use digits::{is_palindrome, reverse_digits};
pub use divisibility::{divisible_by_all, gcd, lcm};
pub use fibonacci::{Fibonacci, fibonacci};
pub use prime::{Primes, is_prime, largest_prime_factor, nth_prime, primes};
pub use triangle::{Triangle, TriangleError, max_path_sum};
