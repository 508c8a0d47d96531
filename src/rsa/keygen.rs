// RSA Key Generation
// Builds textbook RSA key pairs (n, e, d) from two random primes

use log::{debug, warn};
use num_traits::One;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::bigint::{
    from_u64, generate_prime, mod_inverse, RsaBigInt, DEFAULT_MILLER_RABIN_ROUNDS,
};
use crate::error::{RsaError, RsaResult};

/// Public exponent used for every generated key
pub const PUBLIC_EXPONENT: u64 = 65537;

/// Smallest modulus for which phi(n) is guaranteed to exceed the public exponent
pub const MIN_KEY_BITS: u32 = 32;

/// Tuning knobs for key generation
#[derive(Clone, Debug)]
pub struct KeyGenConfig {
    /// Number of prime pairs to try before giving up
    pub max_attempts: u32,
    /// Raised to `MIN_MILLER_RABIN_ROUNDS` when lower
    pub miller_rabin_rounds: u32,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            miller_rabin_rounds: DEFAULT_MILLER_RABIN_ROUNDS,
        }
    }
}

impl KeyGenConfig {
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_miller_rabin_rounds(mut self, rounds: u32) -> Self {
        self.miller_rabin_rounds = rounds;
        self
    }
}

/// Textbook RSA key pair
/// The prime factors are discarded once d is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    n: RsaBigInt, // Modulus
    e: RsaBigInt, // Public exponent
    d: RsaBigInt, // Private exponent
}

impl KeyPair {
    /// Build a key pair from two known primes and a public exponent.
    ///
    /// The primes are trusted to be prime; only distinctness and the
    /// exponent's invertibility modulo phi(n) are checked.
    pub fn from_primes(p: &RsaBigInt, q: &RsaBigInt, e: &RsaBigInt) -> RsaResult<Self> {
        let one = RsaBigInt::one();
        if p == q || p <= &one || q <= &one {
            return Err(RsaError::DegeneratePrimes);
        }

        // φ(n) = (p-1)(q-1)
        let phi_n = (p - 1u8) * (q - 1u8);
        if e <= &one || e >= &phi_n {
            return Err(RsaError::InvalidPublicExponent { e: e.clone() });
        }

        let d = mod_inverse(e, &phi_n).ok_or_else(|| RsaError::NoModularInverse { e: e.clone() })?;

        Ok(KeyPair {
            n: p * q,
            e: e.clone(),
            d,
        })
    }

    pub fn modulus(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn public_exponent(&self) -> &RsaBigInt {
        &self.e
    }

    pub fn private_exponent(&self) -> &RsaBigInt {
        &self.d
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }
}

/// Generate a key pair with a `bits`-bit modulus from the OS entropy source.
/// `bits` must be even and at least [`MIN_KEY_BITS`].
pub fn build_key_pair(bits: u32) -> RsaResult<KeyPair> {
    build_key_pair_with(bits, &KeyGenConfig::default(), &mut OsRng)
}

/// Generate a key pair with explicit configuration and random source
pub fn build_key_pair_with<R>(bits: u32, config: &KeyGenConfig, rng: &mut R) -> RsaResult<KeyPair>
where
    R: RngCore + CryptoRng,
{
    generate_with_factors(bits, config, rng).map(|(key, _, _)| key)
}

fn generate_with_factors<R>(
    bits: u32,
    config: &KeyGenConfig,
    rng: &mut R,
) -> RsaResult<(KeyPair, RsaBigInt, RsaBigInt)>
where
    R: RngCore + CryptoRng,
{
    if bits < MIN_KEY_BITS || bits % 2 != 0 {
        return Err(RsaError::InvalidKeySize(bits));
    }

    let e = from_u64(PUBLIC_EXPONENT);
    let half_bits = bits / 2;
    let attempts = config.max_attempts.max(1);

    for attempt in 1..=attempts {
        let p = generate_prime(half_bits, rng, config.miller_rabin_rounds)?;
        let q = generate_prime(half_bits, rng, config.miller_rabin_rounds)?;

        match KeyPair::from_primes(&p, &q, &e) {
            Ok(key) => {
                debug!(
                    "built {}-bit key pair on attempt {}/{}",
                    key.bit_length(),
                    attempt,
                    attempts
                );
                return Ok((key, p, q));
            }
            Err(err @ (RsaError::DegeneratePrimes | RsaError::NoModularInverse { .. })) => {
                warn!("key generation attempt {}/{} rejected: {}", attempt, attempts, err);
            }
            Err(err) => return Err(err),
        }
    }

    Err(RsaError::KeyGenerationFailed { attempts })
}
