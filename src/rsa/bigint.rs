// RSA Big Integer Operations
// Wrapper around num-bigint for the arithmetic behind key generation

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{RsaError, RsaResult};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm, so intermediates never exceed modulus^2.
/// Encryption and decryption are both this one operation with a different exponent.
///
/// Panics if `modulus` is zero; keys reject such a modulus on construction.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Greatest common divisor (Euclidean algorithm)
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Smallest integer in [2, phi) coprime to `phi`
pub fn find_coprime(phi: &RsaBigInt) -> RsaResult<RsaBigInt> {
    let one = RsaBigInt::one();
    let mut candidate = from_u64(2);
    while &candidate < phi {
        if gcd(&candidate, phi) == one {
            return Ok(candidate);
        }
        candidate += 1u8;
    }
    Err(RsaError::NoCoprime { phi: phi.clone() })
}

/// Compute modular inverse: a^(-1) mod m
///
/// Iterative extended Euclid tracking one Bézout coefficient, normalised
/// into [0, m). A modulus of 1 yields 0. Returns None if the inverse
/// doesn't exist.
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() {
        return None;
    }
    if m.is_one() {
        return Some(RsaBigInt::zero());
    }
    if !gcd(a, m).is_one() {
        return None;
    }

    let modulus = BigInt::from(m.clone());
    let mut a = BigInt::from(a % m);
    let mut m = modulus.clone();
    let mut x = BigInt::one();
    let mut y = BigInt::zero();

    while a > BigInt::one() {
        let quotient = &a / &m;
        let remainder = &a % &m;
        a = std::mem::replace(&mut m, remainder);
        let next = &x - &quotient * &y;
        x = std::mem::replace(&mut y, next);
    }

    if x.is_negative() {
        x += &modulus;
    }

    x.to_biguint()
}
