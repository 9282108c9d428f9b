//! Single timed request.
use polybench_core::{RequestLabels, RequestOutcome};
use reqwest::{Client, StatusCode};
use std::error::Error as StdError;
use std::time::{Duration, Instant};
#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};

/// Issue one GET against `url` and classify how it settled.
///
/// The clock starts right before the request is sent and stops once the body has been read or
/// a transport failure surfaced. `batch_start` anchors `timestamp_sec` to the batch timeline.
pub async fn execute(
    client: &Client,
    url: &str,
    id: usize,
    batch_start: Instant,
    labels: RequestLabels,
) -> RequestOutcome {
    let start = Instant::now();
    let (status, res) = send(client, url).await;
    let end = Instant::now();

    let latency = end.duration_since(start);
    let timestamp = end.duration_since(batch_start);

    let outcome = match res {
        Ok(()) => RequestOutcome {
            id,
            success: status == Some(StatusCode::OK),
            status: status.map(|s| s.as_u16()),
            latency_ms: as_millis_f64(latency),
            timestamp_sec: timestamp.as_secs_f64(),
            error_message: None,
        },
        Err(err) => {
            let message = describe(&err);
            debug!("Request {id} failed: {message}");
            RequestOutcome {
                id,
                success: false,
                status: status.map(|s| s.as_u16()),
                latency_ms: as_millis_f64(latency),
                timestamp_sec: timestamp.as_secs_f64(),
                error_message: Some(message),
            }
        }
    };

    #[cfg(feature = "metrics")]
    record_metrics(labels, latency, outcome.success);
    #[cfg(not(feature = "metrics"))]
    let _ = labels;

    outcome
}

/// Send the request and drain the body. The status is kept even if the body read fails.
async fn send(client: &Client, url: &str) -> (Option<StatusCode>, Result<(), reqwest::Error>) {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => return (None, Err(err)),
    };

    let status = response.status();
    match response.bytes().await {
        Ok(_) => (Some(status), Ok(())),
        Err(err) => (Some(status), Err(err)),
    }
}

/// Flatten an error and its sources into one line, e.g. `error sending request: connection refused`.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn as_millis_f64(dur: Duration) -> f64 {
    dur.as_secs_f64() * 1000.
}

#[cfg(feature = "metrics")]
fn record_metrics(labels: RequestLabels, latency: Duration, success: bool) {
    metrics::histogram!(labels.latency).record(latency.as_nanos() as f64);
    if success {
        metrics::counter!(labels.success).increment(1);
    } else {
        metrics::counter!(labels.error).increment(1);
    }
}
