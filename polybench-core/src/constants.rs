use std::time::Duration;

/// Endpoint hit by the API benchmark.
pub const TARGET_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

/// Number of requests dispatched in a single batch.
pub const NUM_REQUESTS: usize = 10_000;

/// Upper bound on a single request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Idle connections kept per host by the shared client.
pub const POOL_MAX_IDLE_PER_HOST: usize = 50;

/// Artifact written after every run, overwriting the previous one.
pub const OUTPUT_FILE: &str = "api_results.json";

/// Value of the `language` field in the artifact.
pub const LANGUAGE: &str = "rust";
