// Benchmark suites
// Key generation, encryption and decryption for both implementations, plus size sweeps

use std::fmt;

use log::info;
use rand::rngs::OsRng;

use super::runner::try_run;
use super::stats::{summarize_durations, StatSummary};
use crate::config::BenchConfig;
use crate::error::{BenchError, BenchResult};
use crate::library::{decrypt_lib, encrypt_lib, LibKeyPair};
use crate::rsa::bigint::from_u64;
use crate::rsa::{build_key_pair_with, decrypt, encrypt, KeyPair};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Implementation {
    Textbook,
    Library,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    KeyGeneration,
    Encryption,
    Decryption,
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Implementation::Textbook => write!(f, "Textbook RSA"),
            Implementation::Library => write!(f, "rsa crate"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::KeyGeneration => write!(f, "Key generation"),
            Operation::Encryption => write!(f, "Encryption"),
            Operation::Decryption => write!(f, "Decryption"),
        }
    }
}

/// One summarized benchmark
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub implementation: Implementation,
    pub operation: Operation,
    pub label: String,
    pub summary: StatSummary,
}

fn measure<F, R, E>(
    implementation: Implementation,
    operation: Operation,
    label: String,
    iterations: usize,
    op: F,
) -> BenchResult<BenchmarkResult>
where
    F: FnMut() -> Result<R, E>,
    E: Into<BenchError>,
{
    info!("running benchmark: {} ({} iterations)", label, iterations);
    let samples = try_run(op, iterations).map_err(Into::<BenchError>::into)?;
    let summary = summarize_durations(&samples)?;

    Ok(BenchmarkResult {
        implementation,
        operation,
        label,
        summary,
    })
}

fn textbook_key(config: &BenchConfig, bits: u32) -> BenchResult<KeyPair> {
    Ok(build_key_pair_with(bits, &config.keygen, &mut OsRng)?)
}

/// Textbook RSA: key generation, encryption and decryption at `config.key_bits`
pub fn benchmark_manual(config: &BenchConfig) -> BenchResult<Vec<BenchmarkResult>> {
    let implementation = Implementation::Textbook;
    let bits = config.key_bits;

    let key_generation = measure(
        implementation,
        Operation::KeyGeneration,
        format!("{} key generation ({} bits)", implementation, bits),
        config.iterations,
        || textbook_key(config, bits),
    )?;

    let key = textbook_key(config, bits)?;
    let message = from_u64(config.message);
    let ciphertext = encrypt(&message, &key)?;

    let encryption = measure(
        implementation,
        Operation::Encryption,
        format!("{} encryption", implementation),
        config.iterations,
        || encrypt(&message, &key),
    )?;

    let decryption = measure(
        implementation,
        Operation::Decryption,
        format!("{} decryption", implementation),
        config.iterations,
        || decrypt(&ciphertext, &key),
    )?;

    if decrypt(&ciphertext, &key)? != message {
        return Err(BenchError::IntegrityCheckFailed(implementation.to_string()));
    }

    Ok(vec![key_generation, encryption, decryption])
}

/// The rsa crate with PKCS#1 v1.5 padding, same operations as [`benchmark_manual`]
pub fn benchmark_library(config: &BenchConfig) -> BenchResult<Vec<BenchmarkResult>> {
    let implementation = Implementation::Library;
    let bits = config.key_bits as usize;

    let key_generation = measure(
        implementation,
        Operation::KeyGeneration,
        format!("{} key generation ({} bits)", implementation, bits),
        config.iterations,
        || LibKeyPair::generate(bits),
    )?;

    let key = LibKeyPair::generate(bits)?;
    let message = config.library_message.as_slice();
    let ciphertext = encrypt_lib(message, &key.public_key)?;

    let encryption = measure(
        implementation,
        Operation::Encryption,
        format!("{} encryption", implementation),
        config.iterations,
        || encrypt_lib(message, &key.public_key),
    )?;

    let decryption = measure(
        implementation,
        Operation::Decryption,
        format!("{} decryption", implementation),
        config.iterations,
        || decrypt_lib(&ciphertext, &key.private_key),
    )?;

    if decrypt_lib(&ciphertext, &key.private_key)? != message {
        return Err(BenchError::IntegrityCheckFailed(implementation.to_string()));
    }

    Ok(vec![key_generation, encryption, decryption])
}

/// Both implementations back to back
pub fn benchmark_comparison(config: &BenchConfig) -> BenchResult<Vec<BenchmarkResult>> {
    let mut results = benchmark_manual(config)?;
    results.extend(benchmark_library(config)?);
    Ok(results)
}

/// Textbook key generation for every size in `config.key_sizes`
pub fn benchmark_key_sizes(config: &BenchConfig) -> BenchResult<Vec<BenchmarkResult>> {
    config
        .key_sizes
        .iter()
        .map(|&bits| {
            measure(
                Implementation::Textbook,
                Operation::KeyGeneration,
                format!("Key generation ({} bits)", bits),
                config.sweep_iterations,
                || textbook_key(config, bits),
            )
        })
        .collect()
}

/// Textbook encryption of each integer message in `config.message_sizes`
pub fn benchmark_message_sizes(config: &BenchConfig) -> BenchResult<Vec<BenchmarkResult>> {
    let key = textbook_key(config, config.key_bits)?;

    config
        .message_sizes
        .iter()
        .map(|&value| {
            let message = from_u64(value);
            measure(
                Implementation::Textbook,
                Operation::Encryption,
                format!("Encryption (message {})", value),
                config.sweep_iterations,
                || encrypt(&message, &key),
            )
        })
        .collect()
}
