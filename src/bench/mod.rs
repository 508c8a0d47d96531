// Benchmark Module
// Timing harness, statistics and the canned suites comparing textbook RSA with the rsa crate

pub mod report;
pub mod runner;
pub mod stats;
pub mod suite;

pub use report::{format_comparison, format_results};
pub use runner::{run, time_once, try_run};
pub use stats::{summarize, summarize_durations, StatSummary};
pub use suite::{
    benchmark_comparison, benchmark_key_sizes, benchmark_library, benchmark_manual,
    benchmark_message_sizes, BenchmarkResult, Implementation, Operation,
};
