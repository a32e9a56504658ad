// RSA Module - Main module file
// Exports the textbook RSA arithmetic, key generation and per-unit codec

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod prime;

pub use bigint::{find_coprime, gcd, mod_inverse, mod_pow, RsaBigInt};
pub use decrypt::{decrypt_unit, decrypt_units};
pub use encrypt::{encrypt_unit, encrypt_units, encrypt_units_checked};
pub use keygen::{
    generate_default_keypair, generate_keypair, KeyGenConfig, RsaKeyPair, RsaPrivateKey,
    RsaPublicKey,
};
pub use prime::{generate_prime, is_prime, FixedPrimeSource, PrimeSource, RandomPrimeSource};
