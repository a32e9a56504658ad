// Text Converter
// Runs text through encode -> encrypt -> decrypt -> decode and keeps every stage

use std::fmt;

use crate::error::RsaResult;
use crate::rsa::{decrypt_units, encrypt_units, encrypt_units_checked, RsaBigInt, RsaKeyPair};
use crate::text::{self, Unit};

/// Every intermediate value of one conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub keypair: RsaKeyPair,
    pub chars: Vec<char>,
    pub units: Vec<Unit>,
    pub binary: Vec<String>,
    pub encrypted: Vec<RsaBigInt>,
    pub decrypted: Vec<Unit>,
    pub decoded: Vec<char>,
    pub output: String,
}

impl Transcript {
    /// True when the recovered text equals the input
    pub fn round_trips(&self) -> bool {
        self.decoded == self.chars
    }
}

/// Encrypt `input` one character at a time and decrypt it again
///
/// With `strict` set, any character whose code is not below the modulus
/// is an error; otherwise it is encrypted anyway and comes back wrong.
pub fn convert(input: &str, keypair: &RsaKeyPair, strict: bool) -> RsaResult<Transcript> {
    let chars = text::string_to_chars(input);
    let units = text::chars_to_units(&chars);
    let binary = text::units_to_binary(&units);

    let encrypted = if strict {
        encrypt_units_checked(&units, keypair.public_key())?
    } else {
        encrypt_units(&units, keypair.public_key())
    };

    let decrypted = decrypt_units(&encrypted, keypair.private_key())?;
    let decoded = text::units_to_chars(&decrypted)?;
    let output = text::chars_to_string(&decoded);

    log::debug!("converted {} characters", chars.len());

    Ok(Transcript {
        keypair: keypair.clone(),
        chars,
        units,
        binary,
        encrypted,
        decrypted,
        decoded,
        output,
    })
}

/// Bracketed, comma separated list: [a, b, c]
fn list<T: fmt::Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

fn hex_list(items: &[RsaBigInt]) -> String {
    items
        .iter()
        .map(|c| hex::encode(c.to_bytes_be()))
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Public Key (e, n): {}", self.keypair.public_key())?;
        writeln!(f, "Private Key (d, n): {}", self.keypair.private_key())?;
        writeln!(f, "String to List: {}", list(&self.chars))?;
        writeln!(f, "List to Units: {}", list(&self.units))?;
        writeln!(f, "Units to Binary: {}", list(&self.binary))?;
        writeln!(f, "Encrypted List: {}", list(&self.encrypted))?;
        writeln!(f, "Ciphertext (hex): {}", hex_list(&self.encrypted))?;
        writeln!(f, "Decrypted List: {}", list(&self.decrypted))?;
        writeln!(f, "Units to List: {}", list(&self.decoded))?;
        write!(f, "List to String: {}", self.output)
    }
}
