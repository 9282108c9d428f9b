use serde::Serialize;
use std::fmt;

const BANNER_WIDTH: usize = 60;

/// Latency breakdown over the successful requests of a batch, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ResponseTimeSummary {
    pub min_ms: f64,
    pub max_ms: f64,
    #[serde(rename = "average_ms")]
    pub avg_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
}

/// One successful request on the batch timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeseriesPoint {
    #[serde(rename = "timestamp")]
    pub timestamp_sec: f64,
    #[serde(rename = "response_time_ms")]
    pub latency_ms: f64,
}

/// Aggregate of a single API benchmark run.
///
/// Serializes to the `api_results.json` schema. Always holds
/// `total_requests == successful_requests + failed_requests` and
/// `timeseries.len() == successful_requests`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub language: String,
    pub total_requests: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    #[serde(rename = "total_time_seconds")]
    pub total_time_sec: f64,
    #[serde(rename = "requests_per_second")]
    pub requests_per_sec: f64,
    pub response_times: ResponseTimeSummary,
    pub timeseries: Vec<TimeseriesPoint>,
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = "=".repeat(BANNER_WIDTH);
        writeln!(f, "{banner}")?;
        writeln!(f, "Language: {}", self.language.to_uppercase())?;
        writeln!(f, "{banner}")?;
        writeln!(f, "Total Requests: {}", self.total_requests)?;
        writeln!(f, "Successful: {}", self.successful_requests)?;
        writeln!(f, "Failed: {}", self.failed_requests)?;
        writeln!(f, "Total Time: {:.2}s", self.total_time_sec)?;
        writeln!(f, "Requests/sec: {:.2}", self.requests_per_sec)?;

        if self.successful_requests > 0 {
            let rt = &self.response_times;
            writeln!(f)?;
            writeln!(f, "Response Times (ms):")?;
            writeln!(f, "  Min: {:.2}", rt.min_ms)?;
            writeln!(f, "  Max: {:.2}", rt.max_ms)?;
            writeln!(f, "  Avg: {:.2}", rt.avg_ms)?;
            writeln!(f, "  Median: {:.2}", rt.median_ms)?;
            writeln!(f, "  P95: {:.2}", rt.p95_ms)?;
            writeln!(f, "  P99: {:.2}", rt.p99_ms)?;
        }
        writeln!(f, "{banner}")
    }
}
