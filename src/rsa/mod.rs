// RSA Module - Main module file
// Exports the textbook RSA primitive: primes, key pairs, encrypt, decrypt

pub mod bigint;
pub mod keygen;
pub mod encrypt;
pub mod decrypt;

pub use bigint::{generate_prime, mod_pow, random_prime, RsaBigInt};
pub use keygen::{build_key_pair, build_key_pair_with, KeyGenConfig, KeyPair, PUBLIC_EXPONENT};
pub use encrypt::{encrypt, encrypt_u64};
pub use decrypt::{decrypt, decrypt_to_u64};
