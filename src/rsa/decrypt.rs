// RSA Decryption Implementation
// Raw textbook RSA: m = c^d mod n, without the CRT shortcut

use num_traits::ToPrimitive;

use super::bigint::{mod_pow, RsaBigInt};
use super::keygen::KeyPair;
use crate::error::{RsaError, RsaResult};

/// Decrypt an integer ciphertext with the private half of `key`
pub fn decrypt(ciphertext: &RsaBigInt, key: &KeyPair) -> RsaResult<RsaBigInt> {
    if ciphertext >= key.modulus() {
        return Err(RsaError::OutOfRangeInput);
    }

    // Compute m = c^d mod n
    Ok(mod_pow(ciphertext, key.private_exponent(), key.modulus()))
}

/// Decrypt ciphertext to u64
pub fn decrypt_to_u64(ciphertext: &RsaBigInt, key: &KeyPair) -> RsaResult<u64> {
    decrypt(ciphertext, key)?
        .to_u64()
        .ok_or(RsaError::PlaintextOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::encrypt::{encrypt, encrypt_u64};
    use crate::rsa::keygen::build_key_pair;

    #[test]
    fn test_known_scenario() {
        // p = 251, q = 241, n = 60491, φ = 60000, e = 17
        let key = KeyPair::from_primes(&from_u64(251), &from_u64(241), &from_u64(17)).unwrap();
        let message = from_u64(12345);

        let ciphertext = encrypt(&message, &key).unwrap();
        assert_eq!(ciphertext, mod_pow(&message, &from_u64(17), &from_u64(60491)));

        let decrypted = decrypt(&ciphertext, &key).unwrap();
        assert_eq!(decrypted, message);
    }

    #[test]
    fn test_roundtrip_every_message_small_key() {
        let key = KeyPair::from_primes(&from_u64(61), &from_u64(53), &from_u64(17)).unwrap();
        for m in 0..3233u64 {
            let ciphertext = encrypt_u64(m, &key).unwrap();
            assert_eq!(decrypt_to_u64(&ciphertext, &key).unwrap(), m);
        }
    }

    #[test]
    fn test_roundtrip_generated_key() {
        let key = build_key_pair(512).unwrap();
        let edge = key.modulus() - 1u8;
        let messages = vec![
            from_u64(0),
            from_u64(1),
            from_u64(12345),
            from_u64(u64::MAX),
            edge,
        ];

        for message in messages {
            let ciphertext = encrypt(&message, &key).unwrap();
            assert_eq!(decrypt(&ciphertext, &key).unwrap(), message);
        }
    }

    #[test]
    fn test_decrypt_wrong_key() {
        let key1 = build_key_pair(256).unwrap();
        let key2 = build_key_pair(256).unwrap();
        let message = from_u64(42);

        let ciphertext = encrypt(&message, &key1).unwrap();
        match decrypt(&ciphertext, &key2) {
            Ok(plaintext) => assert_ne!(plaintext, message),
            Err(err) => assert!(matches!(err, RsaError::OutOfRangeInput)),
        }
    }

    #[test]
    fn test_decrypt_out_of_range() {
        let key = KeyPair::from_primes(&from_u64(251), &from_u64(241), &from_u64(17)).unwrap();
        let result = decrypt(&from_u64(70000), &key);
        assert!(matches!(result, Err(RsaError::OutOfRangeInput)));
    }

    #[test]
    fn test_decrypt_to_u64_overflow() {
        let key = build_key_pair(256).unwrap();
        let large = key.modulus() - 2u8;
        let ciphertext = encrypt(&large, &key).unwrap();
        assert!(matches!(
            decrypt_to_u64(&ciphertext, &key),
            Err(RsaError::PlaintextOverflow)
        ));
    }
}
