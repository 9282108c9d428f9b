//! A micro-benchmark suite whose centrepiece is a concurrent HTTP request benchmark.
//!
//! The API benchmark dispatches a fixed batch of GETs at once, waits for every one of them,
//! and reduces the outcomes into a [`BenchmarkReport`] which is written as JSON and printed.

pub mod aggregator;
pub mod benchmark;
pub mod error;
pub mod executor;
pub mod orchestrator;
pub mod report;
pub mod suite;

pub use benchmark::{api_benchmark, ApiBenchmark};
pub use error::BenchError;
pub use polybench_core::BenchmarkReport;

pub mod prelude {
    pub use crate::benchmark::{api_benchmark, ApiBenchmark, ConfigurableBenchmark};
    pub use crate::error::BenchError;
    pub use polybench_core::{BenchmarkReport, Concurrency};
}
