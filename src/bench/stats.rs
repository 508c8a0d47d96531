// Statistics over duration samples
// Population statistics (divisor = count), all in f64 nanoseconds

use std::fmt;
use std::time::Duration;

use crate::error::{BenchError, BenchResult};

/// Summary of one benchmark run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub total: f64,
    pub count: usize,
}

/// Reduce samples to mean, population standard deviation, min, max and total.
/// Fails on an empty slice.
pub fn summarize(samples: &[f64]) -> BenchResult<StatSummary> {
    if samples.is_empty() {
        return Err(BenchError::EmptySampleSet);
    }

    let count = samples.len();
    let total: f64 = samples.iter().sum();
    let mean = total / count as f64;

    let variance = samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / count as f64;
    let std_dev = variance.sqrt();

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(StatSummary {
        mean,
        std_dev,
        min,
        max,
        total,
        count,
    })
}

/// [`summarize`] over durations, converted to nanoseconds
pub fn summarize_durations(samples: &[Duration]) -> BenchResult<StatSummary> {
    let nanos: Vec<f64> = samples.iter().map(|d| d.as_nanos() as f64).collect();
    summarize(&nanos)
}

impl fmt::Display for StatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mean: {:.2} ns", self.mean)?;
        writeln!(f, "Std dev: {:.2} ns", self.std_dev)?;
        writeln!(f, "Min: {:.2} ns", self.min)?;
        writeln!(f, "Max: {:.2} ns", self.max)?;
        write!(f, "Total: {:.2} ns ({} samples)", self.total, self.count)
    }
}
