use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use textbook_rsa::bench::{
    benchmark_comparison, benchmark_key_sizes, benchmark_manual, benchmark_message_sizes,
    format_comparison, format_results, time_once,
};
use textbook_rsa::library::{decrypt_lib, encrypt_lib, LibKeyPair};
use textbook_rsa::rsa::{build_key_pair, decrypt_to_u64, encrypt_u64};
use textbook_rsa::BenchConfig;

#[derive(Parser)]
#[command(name = "textbook-rsa", version, about = "Textbook RSA versus the rsa crate")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a textbook key, encrypt and decrypt one message
    Manual {
        #[arg(long, default_value_t = 2048)]
        bits: u32,
        #[arg(long, default_value_t = 12345)]
        message: u64,
    },
    /// Same round trip with the rsa crate, then print the keys as PEM
    Lib {
        #[arg(long, default_value_t = 2048)]
        bits: u32,
    },
    /// Time key generation, encryption and decryption
    Benchmark {
        #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
        iterations: u64,
        #[arg(long, default_value_t = 2048)]
        bits: u32,
        /// Also benchmark the rsa crate and print a comparison table
        #[arg(long)]
        compare: bool,
        /// Also run the key-size and message sweeps
        #[arg(long)]
        sweeps: bool,
    },
}

fn init_logging(verbose: u8) {
    let mut builder = match verbose {
        0 => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")),
        n => {
            let level = match n {
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            };
            let mut builder = env_logger::Builder::new();
            builder.filter_level(level);
            builder
        }
    };
    builder.init();
}

fn run_manual(bits: u32, message: u64) -> Result<()> {
    println!("=== Textbook RSA ===");

    println!("Generating RSA keys...");
    let (key, keygen_time) = time_once(|| build_key_pair(bits));
    let key = key.context("textbook key generation failed")?;
    println!("Key generation time: {:?}", keygen_time);
    println!(
        "Key: n={}, e={}, d={}",
        key.modulus(),
        key.public_exponent(),
        key.private_exponent()
    );

    println!("Original message: {}", message);

    let (ciphertext, encryption_time) = time_once(|| encrypt_u64(message, &key));
    let ciphertext = ciphertext.context("encryption failed")?;
    println!("Ciphertext: {}", ciphertext);
    println!("Encryption time: {:?}", encryption_time);

    let (decrypted, decryption_time) = time_once(|| decrypt_to_u64(&ciphertext, &key));
    let decrypted = decrypted.context("decryption failed")?;
    println!("Decrypted message: {}", decrypted);
    println!("Decryption time: {:?}", decryption_time);

    if decrypted != message {
        bail!("✗ decrypted message {} does not match {}", decrypted, message);
    }
    println!("✓ Encryption/decryption succeeded");
    Ok(())
}

fn run_lib(bits: u32) -> Result<()> {
    println!("=== RSA with the rsa crate ===");

    println!("Generating RSA keys...");
    let (key, keygen_time) = time_once(|| LibKeyPair::generate(bits as usize));
    let key = key.context("rsa crate key generation failed")?;
    println!("Key generation time: {:?}", keygen_time);

    let message = b"Hello, RSA!";
    println!("Original message: {}", String::from_utf8_lossy(message));

    let (ciphertext, encryption_time) = time_once(|| encrypt_lib(message, &key.public_key));
    let ciphertext = ciphertext.context("encryption failed")?;
    println!("Ciphertext: {}", hex::encode(&ciphertext));
    println!("Encryption time: {:?}", encryption_time);

    let (decrypted, decryption_time) = time_once(|| decrypt_lib(&ciphertext, &key.private_key));
    let decrypted = decrypted.context("decryption failed")?;
    println!("Decrypted message: {}", String::from_utf8_lossy(&decrypted));
    println!("Decryption time: {:?}", decryption_time);

    if decrypted.as_slice() != message.as_slice() {
        bail!("✗ decrypted message does not match the original");
    }
    println!("✓ Encryption/decryption succeeded");

    println!("\n=== Key information ({} bits) ===", key.bit_length());
    println!("Public key:");
    println!("{}", key.public_key_pem()?);
    println!("Private key:");
    println!("{}", key.private_key_pem()?);
    Ok(())
}

fn run_benchmark(config: &BenchConfig, compare: bool, sweeps: bool) -> Result<()> {
    let results = if compare {
        benchmark_comparison(config)
    } else {
        benchmark_manual(config)
    }
    .context("benchmark failed")?;

    println!("{}", format_results("Benchmark results", &results));
    println!("{}", format_comparison(&results));
    println!("✓ Integrity check: OK");

    if sweeps {
        let key_sizes = benchmark_key_sizes(config).context("key size sweep failed")?;
        println!("{}", format_results("Key sizes", &key_sizes));

        let messages = benchmark_message_sizes(config).context("message sweep failed")?;
        println!("{}", format_results("Messages", &messages));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Manual { bits, message } => run_manual(bits, message),
        Command::Lib { bits } => run_lib(bits),
        Command::Benchmark {
            iterations,
            bits,
            compare,
            sweeps,
        } => {
            let config = BenchConfig::default()
                .with_iterations(iterations as usize)
                .with_key_bits(bits);
            run_benchmark(&config, compare, sweeps)
        }
    }
}
