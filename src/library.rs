// Production RSA baseline
// Wraps the rsa crate (PKCS#1 v1.5) so the textbook path has something to be measured against

use ::rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use ::rsa::rand_core::OsRng;
use ::rsa::traits::PublicKeyParts;
use ::rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use log::debug;

use crate::error::LibraryError;

/// RSA key pair produced by the rsa crate
#[derive(Debug, Clone)]
pub struct LibKeyPair {
    pub private_key: RsaPrivateKey,
    pub public_key: RsaPublicKey,
}

impl LibKeyPair {
    pub fn generate(bits: usize) -> Result<Self, LibraryError> {
        let private_key = RsaPrivateKey::new(&mut OsRng, bits)?;
        let public_key = RsaPublicKey::from(&private_key);
        debug!("rsa crate generated a {}-bit key pair", bits);
        Ok(LibKeyPair {
            private_key,
            public_key,
        })
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> usize {
        self.public_key.size() * 8
    }

    /// SPKI public key, PEM with LF line endings
    pub fn public_key_pem(&self) -> Result<String, LibraryError> {
        self.public_key
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| LibraryError::Pem(e.to_string()))
    }

    /// PKCS#8 private key, PEM with LF line endings
    pub fn private_key_pem(&self) -> Result<String, LibraryError> {
        let pem = self
            .private_key
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| LibraryError::Pem(e.to_string()))?
            .to_string();
        Ok(pem)
    }
}

/// Encrypt with PKCS#1 v1.5 padding. Randomized: equal inputs give different outputs.
pub fn encrypt_lib(message: &[u8], public_key: &RsaPublicKey) -> Result<Vec<u8>, LibraryError> {
    Ok(public_key.encrypt(&mut OsRng, Pkcs1v15Encrypt, message)?)
}

pub fn decrypt_lib(ciphertext: &[u8], private_key: &RsaPrivateKey) -> Result<Vec<u8>, LibraryError> {
    Ok(private_key.decrypt(Pkcs1v15Encrypt, ciphertext)?)
}
