// Benchmark runner
// Times a closure sequentially with the monotonic clock

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;

const PROGRESS_INTERVAL: usize = 10;

/// Call `operation` `iterations` times and return one elapsed time per call,
/// in call order. Setup belongs outside the closure.
pub fn run<F, R>(mut operation: F, iterations: usize) -> Vec<Duration>
where
    F: FnMut() -> R,
{
    let mut samples = Vec::with_capacity(iterations);

    for i in 0..iterations {
        let start = Instant::now();
        let output = black_box(operation());
        samples.push(start.elapsed());
        drop(output);

        log_progress(i + 1, iterations);
    }

    samples
}

/// Like [`run`], for operations that can fail. Stops at the first error.
pub fn try_run<F, R, E>(mut operation: F, iterations: usize) -> Result<Vec<Duration>, E>
where
    F: FnMut() -> Result<R, E>,
{
    let mut samples = Vec::with_capacity(iterations);

    for i in 0..iterations {
        let start = Instant::now();
        let output = black_box(operation());
        samples.push(start.elapsed());
        output?;

        log_progress(i + 1, iterations);
    }

    Ok(samples)
}

/// Time a single call, keeping its output
pub fn time_once<F, R>(operation: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let output = black_box(operation());
    (output, start.elapsed())
}

fn log_progress(done: usize, total: usize) {
    if done % PROGRESS_INTERVAL == 0 {
        debug!("iteration {}/{}", done, total);
    }
}
