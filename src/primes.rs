use crate::{PrimeError, Result};

/// Largest count a call will accept unless given its own bound.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Returns the first `n` primes in increasing order.
///
/// `n == 0` gives an empty sequence; counts above [`DEFAULT_CAPACITY`]
/// are refused with [`PrimeError::CapacityExceeded`].
pub fn generate(n: usize) -> Result<Vec<u64>> {
    generate_with_capacity(n, DEFAULT_CAPACITY)
}

pub fn generate_with_capacity(n: usize, capacity: usize) -> Result<Vec<u64>> {
    if n > capacity {
        return Err(PrimeError::CapacityExceeded {
            requested: n,
            capacity,
        });
    }

    let mut primes: Vec<u64> = Vec::with_capacity(n);
    if n >= 1 {
        primes.push(2);
    }
    if n >= 2 {
        primes.push(3);
    }

    //
    // Odd candidates from 5 up; each gets a verdict before moving on
    //
    let mut candidate: u64 = 5;
    while primes.len() < n {
        // Divide by the stored primes starting at 3. The candidate is odd,
        // so 2 never divides it.
        let mut k = 1;
        loop {
            let p = primes[k];
            if candidate % p == 0 {
                // composite
                break;
            }
            if p * p > candidate {
                // no stored prime up to sqrt(candidate) divides it
                primes.push(candidate);
                break;
            }
            k += 1;
        }
        candidate += 2;
    }

    Ok(primes)
}

/// Returns the `n`th prime (1-based), so `nth_prime(1) == 2`.
pub fn nth_prime(n: usize) -> Result<u64> {
    nth_prime_with_capacity(n, DEFAULT_CAPACITY)
}

pub fn nth_prime_with_capacity(n: usize, capacity: usize) -> Result<u64> {
    if n == 0 {
        return Err(PrimeError::InvalidCount);
    }
    let primes = generate_with_capacity(n, capacity)?;
    Ok(primes[n - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    // Independent check, not the generator's own square-root cutoff.
    fn is_prime(n: u64) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    #[test]
    fn small_sequences() {
        assert_eq!(generate(1).unwrap(), vec![2]);
        assert_eq!(generate(2).unwrap(), vec![2, 3]);
        assert_eq!(generate(5).unwrap(), vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn zero_count_gives_empty_sequence() {
        assert_eq!(generate(0).unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn nth_prime_values() {
        assert_eq!(nth_prime(1).unwrap(), 2);
        assert_eq!(nth_prime(2).unwrap(), 3);
        assert_eq!(nth_prime(6).unwrap(), 13);
        assert_eq!(nth_prime(10).unwrap(), 29);
        assert_eq!(nth_prime(10_000).unwrap(), 104_729);
    }

    #[test]
    fn nth_prime_is_last_of_sequence() {
        let seq = generate(100).unwrap();
        assert_eq!(nth_prime(100).unwrap(), seq[99]);
    }

    #[test]
    fn sequence_is_increasing_and_all_prime() {
        let seq = generate(500).unwrap();
        assert_eq!(seq.len(), 500);
        for pair in seq.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for &p in &seq {
            assert!(is_prime(p), "{p} is not prime");
        }
    }

    #[test]
    fn shorter_sequence_is_a_prefix() {
        let longer = generate(51).unwrap();
        assert_eq!(generate(50).unwrap(), longer[..50]);
    }

    #[test]
    fn capacity_is_enforced() {
        assert_eq!(
            generate_with_capacity(11, 10),
            Err(PrimeError::CapacityExceeded {
                requested: 11,
                capacity: 10,
            })
        );
        assert!(generate(DEFAULT_CAPACITY + 1).is_err());
        assert!(nth_prime_with_capacity(4, 3).is_err());
    }

    #[test]
    fn count_within_capacity_still_works() {
        assert_eq!(generate_with_capacity(10, 10).unwrap().len(), 10);
        assert_eq!(nth_prime_with_capacity(10, 10).unwrap(), 29);
    }

    #[test]
    fn zeroth_prime_is_an_error() {
        assert_eq!(nth_prime(0), Err(PrimeError::InvalidCount));
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(generate(200).unwrap(), generate(200).unwrap());
        assert_eq!(nth_prime(200).unwrap(), nth_prime(200).unwrap());
    }
}
