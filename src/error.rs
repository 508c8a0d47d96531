// Error types for the textbook RSA core, the library path and the benchmarks

use num_bigint::BigUint;

/// Errors raised by prime generation, key construction and the cipher
#[derive(thiserror::Error, Debug)]
pub enum RsaError {
    #[error("secure random source failed: {0}")]
    PrimeGenerationFailed(#[source] rand::Error),
    #[error("key generation failed after {attempts} attempt(s)")]
    KeyGenerationFailed { attempts: u32 },
    #[error("public exponent {e} has no inverse modulo phi(n)")]
    NoModularInverse { e: BigUint },
    #[error("primes must be distinct and greater than one")]
    DegeneratePrimes,
    #[error("public exponent {e} must satisfy 1 < e < phi(n)")]
    InvalidPublicExponent { e: BigUint },
    #[error("key size of {0} bits is not supported (must be even and at least {})", crate::rsa::keygen::MIN_KEY_BITS)]
    InvalidKeySize(u32),
    #[error("cannot generate a prime of {0} bits")]
    InvalidBitLength(u32),
    #[error("input is out of range: must be less than the modulus")]
    OutOfRangeInput,
    #[error("plaintext does not fit in a u64")]
    PlaintextOverflow,
}

/// Errors raised by the `rsa` crate comparison path
#[derive(thiserror::Error, Debug)]
pub enum LibraryError {
    #[error("rsa crate error: {0}")]
    Rsa(#[from] ::rsa::Error),
    #[error("PEM encoding failed: {0}")]
    Pem(String),
}

/// Errors raised while running benchmarks or summarizing samples
#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("cannot summarize an empty sample set")]
    EmptySampleSet,
    #[error(transparent)]
    Rsa(#[from] RsaError),
    #[error(transparent)]
    Library(#[from] LibraryError),
    #[error("integrity check failed for {0}")]
    IntegrityCheckFailed(String),
}

pub type RsaResult<T> = Result<T, RsaError>;
pub type BenchResult<T> = Result<T, BenchError>;
