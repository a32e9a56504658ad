// Error types for key generation, encryption and text conversion

use thiserror::Error;

use crate::rsa::bigint::RsaBigInt;
use crate::text::Unit;

/// Errors that can occur while generating keys or converting text
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RsaError {
    #[error("no coprime found for phi = {phi}")]
    NoCoprime { phi: RsaBigInt },

    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: RsaBigInt, modulus: RsaBigInt },

    #[error("invalid prime range [{min}, {max}]")]
    InvalidPrimeRange { min: RsaBigInt, max: RsaBigInt },

    #[error("no prime found in [{min}, {max}] after {attempts} attempts")]
    PrimeSearchExhausted {
        min: RsaBigInt,
        max: RsaBigInt,
        attempts: u32,
    },

    #[error("could not draw two distinct primes after {attempts} attempts")]
    DistinctPrimesExhausted { attempts: u32 },

    #[error("prime source has no primes left")]
    PrimeSourceExhausted,

    #[error("{0} is not prime")]
    NotPrime(RsaBigInt),

    #[error("modulus must be greater than 1, got {0}")]
    InvalidModulus(RsaBigInt),

    #[error("message unit {unit} is not below modulus {modulus}")]
    UnitOutOfRange { unit: Unit, modulus: RsaBigInt },

    #[error("decrypted value {0} does not fit in a message unit")]
    UnitNotRepresentable(RsaBigInt),

    #[error("{0} is not a valid character code")]
    InvalidCodePoint(Unit),
}

/// Result type for RSA operations
pub type RsaResult<T> = Result<T, RsaError>;
