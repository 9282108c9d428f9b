//! Batch dispatch and the join-all barrier.
use crate::error::BenchError;
use crate::executor::execute;
use polybench_core::{BenchConfig, Batch, RequestOutcome, API_REQUEST_LABELS};
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
#[allow(unused_imports)]
use tracing::{debug, error, info, instrument, trace, warn};

/// Build the client shared by every request of a batch.
pub fn build_client(config: &BenchConfig) -> Result<Client, BenchError> {
    let client = Client::builder()
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .timeout(config.timeout)
        .build()?;
    Ok(client)
}

/// Fire `config.num_requests` GETs at `config.url` over `client` and wait for all of them.
#[instrument(name = "orchestrator", skip_all, fields(url = %config.url, requests = config.num_requests))]
pub async fn dispatch(client: &Client, config: &BenchConfig) -> Result<Batch, BenchError> {
    let url: Arc<str> = Arc::from(config.url.as_str());
    let client = client.clone();

    run_batch(
        config.num_requests,
        config.in_flight_limit(),
        move |id, batch_start| {
            let client = client.clone();
            let url = url.clone();
            async move { execute(&client, &url, id, batch_start, API_REQUEST_LABELS).await }
        },
    )
    .await
}

/// Spawn one task per id, then block on the join barrier until each one has settled.
///
/// Outcomes are stored in the order the barrier observes them. A task that panics or is
/// cancelled fails the whole batch; the remaining tasks are aborted when the set drops.
pub(crate) async fn run_batch<F, Fut>(
    num_requests: usize,
    in_flight_limit: Option<usize>,
    request: F,
) -> Result<Batch, BenchError>
where
    F: Fn(usize, Instant) -> Fut,
    Fut: Future<Output = RequestOutcome> + Send + 'static,
{
    let limiter = in_flight_limit.map(|n| {
        warn!("In-flight requests capped at {n}; the default is to dispatch the whole batch at once.");
        Arc::new(Semaphore::new(n))
    });

    let mut tasks = JoinSet::new();
    let batch_start = Instant::now();

    for id in 0..num_requests {
        let fut = request(id, batch_start);
        let limiter = limiter.clone();
        tasks.spawn(async move {
            // NOTE: Held until the request settles; `None` when unbounded.
            let _permit = match limiter {
                Some(limiter) => limiter.acquire_owned().await.ok(),
                None => None,
            };
            fut.await
        });
    }
    debug!("Dispatched {num_requests} requests");

    let mut outcomes = Vec::with_capacity(num_requests);
    while let Some(res) = tasks.join_next().await {
        match res {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => {
                error!("Join barrier failed with {} requests outstanding: {err}", tasks.len());
                return Err(err.into());
            }
        }
    }
    let elapsed = batch_start.elapsed();

    info!("Batch settled in {}", humantime::format_duration(elapsed));

    Ok(Batch::new(outcomes, elapsed))
}
