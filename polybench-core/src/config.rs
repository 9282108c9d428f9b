use crate::{NUM_REQUESTS, OUTPUT_FILE, POOL_MAX_IDLE_PER_HOST, REQUEST_TIMEOUT, TARGET_URL};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

/// How many requests may be in flight at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Concurrency {
    /// Every request in the batch is dispatched at once.
    #[default]
    Unbounded,
    /// At most `n` requests are in flight; the rest wait for a slot.
    Limited(NonZeroUsize),
}

/// Settings for one API benchmark run. Defaults come from the crate constants.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub url: String,
    pub num_requests: usize,
    pub timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub concurrency: Concurrency,
    pub output: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(TARGET_URL)
    }
}

impl BenchConfig {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            num_requests: NUM_REQUESTS,
            timeout: REQUEST_TIMEOUT,
            pool_max_idle_per_host: POOL_MAX_IDLE_PER_HOST,
            concurrency: Concurrency::Unbounded,
            output: PathBuf::from(OUTPUT_FILE),
        }
    }

    /// The in-flight cap, or `None` when every request is dispatched up front.
    pub fn in_flight_limit(&self) -> Option<usize> {
        match self.concurrency {
            Concurrency::Unbounded => None,
            Concurrency::Limited(n) => Some(n.get()),
        }
    }
}
