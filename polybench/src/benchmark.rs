//! The awaitable API benchmark handle.
use crate::aggregator::aggregate_batch;
use crate::error::BenchError;
use crate::orchestrator::{build_client, dispatch};
use crate::report::publish;
use polybench_core::{Batch, BenchConfig, BenchmarkReport, Concurrency};
use std::{
    future::Future,
    path::PathBuf,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};
#[allow(unused_imports)]
use tracing::{debug, error, info, instrument, trace, warn, Instrument};

/// Concurrent HTTP request benchmark.
///
/// Nothing runs until the handle is awaited. The defaults fire 10,000 concurrent GETs at the
/// reference endpoint and write `api_results.json` to the working directory.
///
/// # Example
/// ```no_run
/// use polybench::prelude::*;
///
/// #[tokio::main]
/// async fn main() -> Result<(), BenchError> {
///     let report = api_benchmark().await?;
///     assert_eq!(report.total_requests, 10_000);
///     Ok(())
/// }
/// ```
pub struct ApiBenchmark {
    runner_fut: Option<Pin<Box<dyn Future<Output = Result<BenchmarkReport, BenchError>> + Send>>>,
    config: BenchConfig,
}

/// Handle with the default configuration.
pub fn api_benchmark() -> ApiBenchmark {
    ApiBenchmark::new(BenchConfig::default())
}

impl ApiBenchmark {
    #[doc(hidden)]
    pub fn new(config: BenchConfig) -> Self {
        Self {
            runner_fut: None,
            config,
        }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }
}

impl Future for ApiBenchmark {
    type Output = Result<BenchmarkReport, BenchError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.runner_fut.is_none() {
            let config = self.config.clone();
            self.runner_fut = Some(Box::pin(async move { run_benchmark(config).await }));
        }

        if let Some(runner) = &mut self.runner_fut {
            runner.as_mut().poll(cx)
        } else {
            unreachable!()
        }
    }
}

/// Builder methods for [`ApiBenchmark`]. The binary only uses the defaults; these exist so a
/// run can be pointed at a local service.
pub trait ConfigurableBenchmark: Future + Sized + Send {
    fn url(self, url: &str) -> Self;
    fn requests(self, num_requests: usize) -> Self;
    fn timeout(self, timeout: Duration) -> Self;
    fn concurrency(self, concurrency: Concurrency) -> Self;
    fn output(self, path: impl Into<PathBuf>) -> Self;
}

impl ConfigurableBenchmark for ApiBenchmark {
    /// Target endpoint.
    fn url(mut self, url: &str) -> Self {
        self.config.url = url.to_string();
        self
    }

    /// Batch size.
    fn requests(mut self, num_requests: usize) -> Self {
        self.config.num_requests = num_requests;
        self
    }

    /// Per-request timeout.
    fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Cap the number of requests in flight.
    ///
    /// NOTE: Anything other than [`Concurrency::Unbounded`] changes the stress profile of the
    /// run, though not the shape of the report.
    fn concurrency(mut self, concurrency: Concurrency) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    /// Where the JSON artifact goes.
    fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = path.into();
        self
    }
}

#[instrument(name = "api_benchmark", skip_all, fields(url = %config.url))]
pub(crate) async fn run_benchmark(config: BenchConfig) -> Result<BenchmarkReport, BenchError> {
    println!(
        "Starting benchmark: {} requests to {}",
        config.num_requests, config.url
    );
    debug!("Running with config {:?}", &config);

    let client = build_client(&config)?;
    settle(dispatch(&client, &config), &config).await
}

/// Wait for the batch, then aggregate and publish. A failed batch returns before anything is
/// written.
async fn settle<B>(batch: B, config: &BenchConfig) -> Result<BenchmarkReport, BenchError>
where
    B: Future<Output = Result<Batch, BenchError>>,
{
    let batch = batch.await?;
    info!(
        "Benchmark complete: {}/{} succeeded in {}",
        batch.success_count(),
        batch.outcomes.len(),
        humantime::format_duration(batch.elapsed)
    );

    let report = aggregate_batch(&batch);
    publish(&report, &config.output);
    Ok(report)
}
