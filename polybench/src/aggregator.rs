//! Reduction of a settled batch into a [`BenchmarkReport`].
use polybench_core::{
    Batch, BenchmarkReport, RequestOutcome, ResponseTimeSummary, TimeseriesPoint, LANGUAGE,
};
use std::time::Duration;

const MS_DECIMALS: i32 = 2;
const TIMESTAMP_DECIMALS: i32 = 3;

pub fn aggregate_batch(batch: &Batch) -> BenchmarkReport {
    aggregate(&batch.outcomes, batch.elapsed)
}

/// Build the report for `outcomes`, given in completion order, and the batch wall time.
///
/// Only the timeseries depends on the order of `outcomes`; every other field is a function of
/// the outcome set alone.
pub fn aggregate(outcomes: &[RequestOutcome], elapsed: Duration) -> BenchmarkReport {
    let successful: Vec<&RequestOutcome> = outcomes.iter().filter(|o| o.success).collect();
    let total_requests = outcomes.len();
    let successful_requests = successful.len();
    let total_secs = elapsed.as_secs_f64();

    let (response_times, timeseries, requests_per_sec) = if successful.is_empty() {
        (ResponseTimeSummary::default(), vec![], 0.)
    } else {
        let mut latencies: Vec<f64> = successful.iter().map(|o| o.latency_ms).collect();
        latencies.sort_by(f64::total_cmp);

        let timeseries = successful
            .iter()
            .map(|o| TimeseriesPoint {
                timestamp_sec: round_to(o.timestamp_sec, TIMESTAMP_DECIMALS),
                latency_ms: round_to(o.latency_ms, MS_DECIMALS),
            })
            .collect();

        (
            summarize(&latencies),
            timeseries,
            throughput(total_requests, total_secs),
        )
    };

    BenchmarkReport {
        language: LANGUAGE.to_string(),
        total_requests,
        successful_requests,
        failed_requests: total_requests - successful_requests,
        total_time_sec: round_to(total_secs, MS_DECIMALS),
        requests_per_sec: round_to(requests_per_sec, MS_DECIMALS),
        response_times,
        timeseries,
    }
}

/// `sorted` must be ascending and non-empty.
fn summarize(sorted: &[f64]) -> ResponseTimeSummary {
    let sum: f64 = sorted.iter().sum();
    let avg = sum / sorted.len() as f64;

    ResponseTimeSummary {
        min_ms: round_to(sorted[0], MS_DECIMALS),
        max_ms: round_to(sorted[sorted.len() - 1], MS_DECIMALS),
        avg_ms: round_to(avg, MS_DECIMALS),
        median_ms: round_to(percentile(sorted, 0.5), MS_DECIMALS),
        p95_ms: round_to(percentile(sorted, 0.95), MS_DECIMALS),
        p99_ms: round_to(percentile(sorted, 0.99), MS_DECIMALS),
    }
}

/// Requests over the whole batch per second of batch wall time, failures included.
fn throughput(total_requests: usize, total_secs: f64) -> f64 {
    if total_secs > 0. {
        total_requests as f64 / total_secs
    } else {
        0.
    }
}

/// Nearest-rank percentile of an ascending slice: `sorted[ceil(n * p) - 1]`, clamped to the
/// slice. Returns 0 for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.;
    }
    let rank = (sorted.len() as f64 * p).ceil() as usize;
    let index = rank.saturating_sub(1).min(sorted.len() - 1);
    sorted[index]
}

/// Round half away from zero at `decimals` places. Latencies are never negative, so this is
/// round-half-up for every value the report holds.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
