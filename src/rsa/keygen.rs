// RSA Key Generation
// Builds a textbook key pair from two small primes

use std::fmt;

use num_traits::One;
use rand::thread_rng;

use super::bigint::{find_coprime, from_u64, mod_inverse, RsaBigInt};
use super::prime::{is_prime, PrimeSource, RandomPrimeSource};
use crate::error::{RsaError, RsaResult};

/// RSA Public Key, used only for encryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    e: RsaBigInt, // Public exponent
    n: RsaBigInt, // Modulus
}

/// RSA Private Key, used only for decryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    d: RsaBigInt, // Private exponent
    n: RsaBigInt, // Modulus (same as public)
    p: RsaBigInt, // First prime factor
    q: RsaBigInt, // Second prime factor
}

/// RSA Key Pair (both public and private keys, from the same primes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    public_key: RsaPublicKey,
    private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    /// Build a public key from its parts; the modulus must exceed 1
    pub fn new(e: RsaBigInt, n: RsaBigInt) -> RsaResult<Self> {
        if n <= RsaBigInt::one() {
            return Err(RsaError::InvalidModulus(n));
        }
        Ok(Self { e, n })
    }

    pub fn exponent(&self) -> &RsaBigInt {
        &self.e
    }

    pub fn modulus(&self) -> &RsaBigInt {
        &self.n
    }
}

impl RsaPrivateKey {
    pub fn exponent(&self) -> &RsaBigInt {
        &self.d
    }

    pub fn modulus(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn p(&self) -> &RsaBigInt {
        &self.p
    }

    pub fn q(&self) -> &RsaBigInt {
        &self.q
    }

    /// φ(n) = (p-1)(q-1)
    pub fn totient(&self) -> RsaBigInt {
        (&self.p - 1u8) * (&self.q - 1u8)
    }
}

impl fmt::Display for RsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.e, self.n)
    }
}

impl fmt::Display for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.d, self.n)
    }
}

impl RsaKeyPair {
    /// Derive the key pair for the primes p and q
    ///
    /// e is the smallest integer >= 2 coprime to φ(n) and d its inverse
    /// modulo φ(n). p == q is accepted here; see [`KeyGenConfig::distinct_primes`].
    pub fn from_primes(p: RsaBigInt, q: RsaBigInt) -> RsaResult<Self> {
        for prime in [&p, &q] {
            if !is_prime(prime) {
                return Err(RsaError::NotPrime(prime.clone()));
            }
        }

        // n = p * q, φ(n) = (p-1)(q-1)
        let n = &p * &q;
        let phi = (&p - 1u8) * (&q - 1u8);

        let e = find_coprime(&phi)?;
        let d = mod_inverse(&e, &phi).ok_or_else(|| RsaError::NoInverse {
            value: e.clone(),
            modulus: phi.clone(),
        })?;

        log::debug!("p = {}, q = {}, n = {}, phi = {}", p, q, n, phi);

        Ok(Self {
            public_key: RsaPublicKey { e, n: n.clone() },
            private_key: RsaPrivateKey { d, n, p, q },
        })
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }

    /// Number of significant bits in the modulus
    pub fn bit_length(&self) -> u64 {
        self.public_key.n.bits()
    }
}

/// Configuration for key generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    pub min_prime: u64,
    pub max_prime: u64,
    pub max_attempts: u32,
    /// Redraw q while it equals p. With p == q the totient (p-1)^2 is not
    /// the order of the unit group mod p^2, so most units won't round-trip.
    pub distinct_primes: bool,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            min_prime: 100,
            max_prime: 1000,
            max_attempts: 10_000,
            distinct_primes: true,
        }
    }
}

impl KeyGenConfig {
    pub fn with_prime_range(mut self, min: u64, max: u64) -> Self {
        self.min_prime = min;
        self.max_prime = max;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_distinct_primes(mut self, distinct: bool) -> Self {
        self.distinct_primes = distinct;
        self
    }
}

/// Generate an RSA key pair with primes taken from `source`
pub fn generate_keypair<S>(source: &mut S, config: &KeyGenConfig) -> RsaResult<RsaKeyPair>
where
    S: PrimeSource + ?Sized,
{
    let min = from_u64(config.min_prime);
    let max = from_u64(config.max_prime);

    // Step 1: Draw two primes p and q
    let p = source.next_prime(&min, &max)?;
    let mut q = source.next_prime(&min, &max)?;

    if config.distinct_primes {
        let mut redraws = 0;
        while q == p {
            if redraws >= config.max_attempts {
                return Err(RsaError::DistinctPrimesExhausted {
                    attempts: config.max_attempts,
                });
            }
            log::debug!("q collided with p = {}, redrawing", p);
            q = source.next_prime(&min, &max)?;
            redraws += 1;
        }
    } else if p == q {
        log::warn!("p and q are both {}; most messages will not decrypt", p);
    }

    // Steps 2-6: modulus, totient, exponents
    let keypair = RsaKeyPair::from_primes(p, q)?;
    log::info!(
        "generated {}-bit key pair: e = {}, n = {}",
        keypair.bit_length(),
        keypair.public_key.e,
        keypair.public_key.n
    );

    Ok(keypair)
}

/// Generate RSA key pair with default settings (primes in 100..=1000, thread RNG)
pub fn generate_default_keypair() -> RsaResult<RsaKeyPair> {
    let config = KeyGenConfig::default();
    let mut source = RandomPrimeSource::new(thread_rng(), config.max_attempts);
    generate_keypair(&mut source, &config)
}
