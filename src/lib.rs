// Textbook RSA with a timing harness
// Exports the from-scratch RSA primitive, the rsa crate baseline and the benchmarks

pub mod bench;
pub mod config;
pub mod error;
pub mod library;
pub mod rsa;

pub use crate::bench::{run, summarize, StatSummary};
pub use crate::config::BenchConfig;
pub use crate::error::{BenchError, LibraryError, RsaError};
pub use crate::rsa::{build_key_pair, decrypt, encrypt, KeyPair};
