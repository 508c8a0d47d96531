// RSA Encryption Implementation
// Raw textbook RSA: c = m^e mod n, with no padding or randomization

use super::bigint::{from_u64, mod_pow, RsaBigInt};
use super::keygen::KeyPair;
use crate::error::{RsaError, RsaResult};

/// Encrypt an integer message with the public half of `key`.
///
/// The message must be below the modulus; larger values cannot round-trip and
/// are rejected. Encryption is deterministic.
pub fn encrypt(message: &RsaBigInt, key: &KeyPair) -> RsaResult<RsaBigInt> {
    if message >= key.modulus() {
        return Err(RsaError::OutOfRangeInput);
    }

    // Compute c = m^e mod n
    Ok(mod_pow(message, key.public_exponent(), key.modulus()))
}

/// Encrypt a u64 value
pub fn encrypt_u64(value: u64, key: &KeyPair) -> RsaResult<RsaBigInt> {
    encrypt(&from_u64(value), key)
}
