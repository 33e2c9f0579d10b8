//! Finds prime numbers by trial division against the primes found so far.

mod format;
mod primes;

pub use format::{group_digits, Grouping};
pub use primes::{
    generate, generate_with_capacity, nth_prime, nth_prime_with_capacity, DEFAULT_CAPACITY,
};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrimeError {
    #[error("count must be at least 1")]
    InvalidCount,
    #[error("{requested} primes requested, capacity is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },
    #[error("not a whole number: {0}")]
    MalformedInput(String),
}

pub type Result<T> = std::result::Result<T, PrimeError>;
