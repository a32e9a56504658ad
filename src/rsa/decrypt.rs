// RSA Decryption Implementation
// Inverts the per-unit encryption with the private exponent

use num_traits::ToPrimitive;

use super::bigint::{mod_pow, RsaBigInt};
use super::keygen::RsaPrivateKey;
use crate::error::{RsaError, RsaResult};
use crate::text::Unit;

/// Decrypt one ciphertext unit: m = c^d mod n
pub fn decrypt_unit(ciphertext: &RsaBigInt, private_key: &RsaPrivateKey) -> RsaResult<Unit> {
    let m = mod_pow(ciphertext, private_key.exponent(), private_key.modulus());
    m.to_u32().ok_or(RsaError::UnitNotRepresentable(m))
}

/// Decrypt every unit independently, in order
pub fn decrypt_units(ciphertext: &[RsaBigInt], private_key: &RsaPrivateKey) -> RsaResult<Vec<Unit>> {
    ciphertext
        .iter()
        .map(|c| decrypt_unit(c, private_key))
        .collect()
}

impl RsaPrivateKey {
    /// Decrypt a sequence of ciphertext units with this private key
    pub fn decrypt(&self, ciphertext: &[RsaBigInt]) -> RsaResult<Vec<Unit>> {
        decrypt_units(ciphertext, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::encrypt::{encrypt_unit, encrypt_units};
    use crate::rsa::keygen::RsaKeyPair;
    use crate::rsa::prime::{FixedPrimeSource, RandomPrimeSource};
    use crate::rsa::{generate_keypair, KeyGenConfig};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn known_keypair() -> RsaKeyPair {
        RsaKeyPair::from_primes(from_u64(101), from_u64(103)).unwrap()
    }

    #[test]
    fn test_decrypt_known_unit() {
        let keypair = known_keypair();
        // 'H'
        let c = encrypt_unit(72, keypair.public_key());
        assert_ne!(c, from_u64(72));
        assert_eq!(decrypt_unit(&c, keypair.private_key()).unwrap(), 72);
    }

    #[test]
    fn test_roundtrip_all_units_below_modulus() {
        let keypair = known_keypair();
        let units: Vec<Unit> = (0..10403).collect();
        let ciphertext = keypair.public_key().encrypt(&units);
        let decrypted = keypair.private_key().decrypt(&ciphertext).unwrap();
        assert_eq!(units, decrypted);
    }

    #[test]
    fn test_roundtrip_at_boundary() {
        let keypair = known_keypair();
        let last = 10403 - 1;
        let c = encrypt_unit(last, keypair.public_key());
        assert_eq!(decrypt_unit(&c, keypair.private_key()).unwrap(), last);
    }

    #[test]
    fn test_units_at_or_above_modulus_do_not_roundtrip() {
        let keypair = known_keypair();
        for unit in [10403, 10403 + 72, 0x1F600] {
            let c = encrypt_unit(unit, keypair.public_key());
            let decrypted = decrypt_unit(&c, keypair.private_key()).unwrap();
            assert_ne!(decrypted, unit);
            assert_eq!(decrypted, unit % 10403);
        }
    }

    #[test]
    fn test_roundtrip_random_keys() {
        let config = KeyGenConfig::default();
        let mut rng = StdRng::seed_from_u64(21);
        let mut source = RandomPrimeSource::new(StdRng::seed_from_u64(22), config.max_attempts);

        for _ in 0..20 {
            let keypair = generate_keypair(&mut source, &config).unwrap();
            let units: Vec<Unit> = (0..32).map(|_| rng.gen_range(0..10403)).collect();
            let ciphertext = encrypt_units(&units, keypair.public_key());
            assert_eq!(decrypt_units(&ciphertext, keypair.private_key()).unwrap(), units);
        }
    }

    #[test]
    fn test_decrypt_wrong_key() {
        let keypair1 = known_keypair();
        let mut source = FixedPrimeSource::from_u64s(&[107, 109]);
        let keypair2 = generate_keypair(&mut source, &KeyGenConfig::default()).unwrap();

        let units = [72, 101, 108, 108, 111];
        let ciphertext = keypair1.public_key().encrypt(&units);
        let decrypted = keypair2.private_key().decrypt(&ciphertext).unwrap();
        assert_ne!(decrypted, units);
    }

    #[test]
    fn test_decrypt_unrepresentable() {
        let p = from_u64(65537);
        let q = from_u64(65539);
        let keypair = RsaKeyPair::from_primes(p, q).unwrap();
        let big = from_u64(u64::from(u32::MAX) + 1);
        // decrypting an encryption of a value above u32::MAX
        let c = crate::rsa::bigint::mod_pow(
            &big,
            keypair.public_key().exponent(),
            keypair.public_key().modulus(),
        );
        assert_eq!(
            decrypt_unit(&c, keypair.private_key()),
            Err(RsaError::UnitNotRepresentable(big))
        );
    }
}
