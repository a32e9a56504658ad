// RSA Encryption Implementation
// Textbook RSA: each message unit is encrypted on its own, no padding

use super::bigint::{from_u64, mod_pow, RsaBigInt};
use super::keygen::RsaPublicKey;
use crate::error::{RsaError, RsaResult};
use crate::text::Unit;

/// Encrypt one message unit: c = m^e mod n
///
/// A unit >= n is reduced modulo n first and will not decrypt back to
/// itself. Use [`encrypt_units_checked`] to reject such units.
pub fn encrypt_unit(unit: Unit, public_key: &RsaPublicKey) -> RsaBigInt {
    mod_pow(
        &from_u64(u64::from(unit)),
        public_key.exponent(),
        public_key.modulus(),
    )
}

/// Encrypt every unit independently, in order
pub fn encrypt_units(units: &[Unit], public_key: &RsaPublicKey) -> Vec<RsaBigInt> {
    units
        .iter()
        .map(|&unit| {
            if !fits_modulus(unit, public_key) {
                log::warn!(
                    "unit {} is not below modulus {}; it will not round-trip",
                    unit,
                    public_key.modulus()
                );
            }
            encrypt_unit(unit, public_key)
        })
        .collect()
}

/// Encrypt every unit, failing on the first one that is not below the modulus
pub fn encrypt_units_checked(units: &[Unit], public_key: &RsaPublicKey) -> RsaResult<Vec<RsaBigInt>> {
    units
        .iter()
        .map(|&unit| {
            if fits_modulus(unit, public_key) {
                Ok(encrypt_unit(unit, public_key))
            } else {
                Err(RsaError::UnitOutOfRange {
                    unit,
                    modulus: public_key.modulus().clone(),
                })
            }
        })
        .collect()
}

fn fits_modulus(unit: Unit, public_key: &RsaPublicKey) -> bool {
    &from_u64(u64::from(unit)) < public_key.modulus()
}

impl RsaPublicKey {
    /// Encrypt a sequence of message units with this public key
    pub fn encrypt(&self, units: &[Unit]) -> Vec<RsaBigInt> {
        encrypt_units(units, self)
    }
}
