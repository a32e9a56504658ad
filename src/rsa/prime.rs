// Prime Generation
// Random prime draws in a fixed range, tested by trial division

use std::collections::VecDeque;

use num_bigint::RandBigInt;
use num_traits::{One, Zero};
use rand::Rng;

use super::bigint::{from_u64, RsaBigInt};
use crate::error::{RsaError, RsaResult};

/// Trial division primality test
/// n is prime iff n > 1 and nothing in [2, floor(sqrt(n))] divides it
pub fn is_prime(n: &RsaBigInt) -> bool {
    if n <= &RsaBigInt::one() {
        return false;
    }

    let limit = n.sqrt();
    let mut divisor = from_u64(2);
    while divisor <= limit {
        if (n % &divisor).is_zero() {
            return false;
        }
        divisor += 1u8;
    }

    true
}

/// Draw uniform candidates in [min, max] until one is prime
/// Gives up after `max_attempts` draws so an empty range cannot spin forever.
pub fn generate_prime<R: Rng + ?Sized>(
    rng: &mut R,
    min: &RsaBigInt,
    max: &RsaBigInt,
    max_attempts: u32,
) -> RsaResult<RsaBigInt> {
    if min.is_zero() || min > max {
        return Err(RsaError::InvalidPrimeRange {
            min: min.clone(),
            max: max.clone(),
        });
    }

    let upper = max + 1u8;
    for attempt in 1..=max_attempts {
        let candidate = rng.gen_biguint_range(min, &upper);
        if is_prime(&candidate) {
            log::debug!("prime {} found after {} draws", candidate, attempt);
            return Ok(candidate);
        }
    }

    Err(RsaError::PrimeSearchExhausted {
        min: min.clone(),
        max: max.clone(),
        attempts: max_attempts,
    })
}

/// Where key generation gets its primes from
pub trait PrimeSource {
    /// Produce a prime in [min, max]
    fn next_prime(&mut self, min: &RsaBigInt, max: &RsaBigInt) -> RsaResult<RsaBigInt>;
}

/// Primes drawn from a random number generator
#[derive(Debug, Clone)]
pub struct RandomPrimeSource<R> {
    rng: R,
    max_attempts: u32,
}

impl<R: Rng> RandomPrimeSource<R> {
    pub fn new(rng: R, max_attempts: u32) -> Self {
        Self { rng, max_attempts }
    }
}

impl<R: Rng> PrimeSource for RandomPrimeSource<R> {
    fn next_prime(&mut self, min: &RsaBigInt, max: &RsaBigInt) -> RsaResult<RsaBigInt> {
        generate_prime(&mut self.rng, min, max, self.max_attempts)
    }
}

/// A predetermined list of primes, handed out in order
///
/// The requested range is ignored; only primality is checked. Useful for
/// reproducible keys.
#[derive(Debug, Clone, Default)]
pub struct FixedPrimeSource {
    primes: VecDeque<RsaBigInt>,
}

impl FixedPrimeSource {
    pub fn new<I>(primes: I) -> Self
    where
        I: IntoIterator<Item = RsaBigInt>,
    {
        Self {
            primes: primes.into_iter().collect(),
        }
    }

    pub fn from_u64s(primes: &[u64]) -> Self {
        Self::new(primes.iter().copied().map(from_u64))
    }
}

impl PrimeSource for FixedPrimeSource {
    fn next_prime(&mut self, _min: &RsaBigInt, _max: &RsaBigInt) -> RsaResult<RsaBigInt> {
        let prime = self.primes.pop_front().ok_or(RsaError::PrimeSourceExhausted)?;
        if !is_prime(&prime) {
            return Err(RsaError::NotPrime(prime));
        }
        Ok(prime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_is_prime_edge_cases() {
        assert!(!is_prime(&from_u64(0)));
        assert!(!is_prime(&from_u64(1)));
        assert!(is_prime(&from_u64(2)));
        assert!(is_prime(&from_u64(3)));
        assert!(!is_prime(&from_u64(4)));
    }

    #[test]
    fn test_is_prime_known_values() {
        for p in [5u64, 7, 11, 101, 103, 997, 7919] {
            assert!(is_prime(&from_u64(p)), "{} should be prime", p);
        }
        // 121 = 11^2 and 961 = 31^2 check the sqrt bound is inclusive
        for c in [9u64, 25, 121, 961, 1000, 1001, 9999] {
            assert!(!is_prime(&from_u64(c)), "{} should be composite", c);
        }
    }

    #[test]
    fn test_is_prime_matches_definition() {
        for n in 0u64..2000 {
            let by_definition = n > 1 && (2..n).take_while(|i| i * i <= n).all(|i| n % i != 0);
            assert_eq!(is_prime(&from_u64(n)), by_definition, "n = {}", n);
        }
    }

    #[test]
    fn test_generate_prime_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let min = from_u64(100);
        let max = from_u64(1000);
        for _ in 0..50 {
            let p = generate_prime(&mut rng, &min, &max, 10_000).unwrap();
            assert!(p >= min && p <= max);
            assert!(is_prime(&p));
        }
    }

    #[test]
    fn test_generate_prime_single_value_range() {
        let mut rng = StdRng::seed_from_u64(2);
        let p = from_u64(101);
        assert_eq!(generate_prime(&mut rng, &p, &p, 10).unwrap(), p);
    }

    #[test]
    fn test_generate_prime_no_primes_in_range() {
        // 114..=126 contains no primes
        let mut rng = StdRng::seed_from_u64(3);
        let result = generate_prime(&mut rng, &from_u64(114), &from_u64(126), 200);
        assert_eq!(
            result,
            Err(RsaError::PrimeSearchExhausted {
                min: from_u64(114),
                max: from_u64(126),
                attempts: 200,
            })
        );
    }

    #[test]
    fn test_generate_prime_invalid_range() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(matches!(
            generate_prime(&mut rng, &from_u64(1000), &from_u64(100), 10),
            Err(RsaError::InvalidPrimeRange { .. })
        ));
        assert!(matches!(
            generate_prime(&mut rng, &from_u64(0), &from_u64(100), 10),
            Err(RsaError::InvalidPrimeRange { .. })
        ));
    }

    #[test]
    fn test_random_source_is_reproducible() {
        let min = from_u64(100);
        let max = from_u64(1000);
        let mut a = RandomPrimeSource::new(StdRng::seed_from_u64(9), 10_000);
        let mut b = RandomPrimeSource::new(StdRng::seed_from_u64(9), 10_000);
        for _ in 0..10 {
            assert_eq!(a.next_prime(&min, &max).unwrap(), b.next_prime(&min, &max).unwrap());
        }
    }

    #[test]
    fn test_fixed_source() {
        let min = from_u64(100);
        let max = from_u64(1000);
        let mut source = FixedPrimeSource::from_u64s(&[101, 103, 12]);
        assert_eq!(source.next_prime(&min, &max).unwrap(), from_u64(101));
        assert_eq!(source.next_prime(&min, &max).unwrap(), from_u64(103));
        assert_eq!(source.next_prime(&min, &max), Err(RsaError::NotPrime(from_u64(12))));
        assert_eq!(source.next_prime(&min, &max), Err(RsaError::PrimeSourceExhausted));
    }
}
