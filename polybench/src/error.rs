use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Failed to build the HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Join barrier failed before every request settled: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Failed to write the report artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize the report: {0}")]
    Serialize(#[from] serde_json::Error),
}
