//! Textbook RSA over text: small random keys, one encrypted unit per character.
//!
//! Not a real cryptosystem. There is no padding, the randomness is not
//! cryptographically secure and the moduli are trivially factorable.

pub mod converter;
pub mod error;
pub mod rsa;
pub mod text;
pub mod util;

pub use converter::{convert, Transcript};
pub use error::{RsaError, RsaResult};
