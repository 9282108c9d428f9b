//! The suite's single-threaded leaf benchmarks. Each one is independent of the API benchmark.
pub mod fibonacci;
pub mod matrix;
pub mod sorting;
pub mod strings;

use std::time::{Duration, Instant};

/// A value together with the time it took to compute.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}
