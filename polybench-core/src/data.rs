use std::time::Duration;

/// Result of one dispatched request. Built once by the executor and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOutcome {
    /// Sequence number assigned at dispatch, unique within a batch.
    pub id: usize,
    /// True iff a response arrived with status 200 and its body was read.
    pub success: bool,
    /// HTTP status, when a response was received at all.
    pub status: Option<u16>,
    /// Send-to-completion time in milliseconds.
    pub latency_ms: f64,
    /// Batch start to completion of this request, in seconds.
    pub timestamp_sec: f64,
    /// Set only for transport failures (timeout, connect, DNS, TLS, body read).
    pub error_message: Option<String>,
}

/// Every outcome of a batch plus its wall time.
///
/// `outcomes` is kept in the order completions were observed at the join barrier, which is
/// the order the timeseries reports. Use [`Batch::by_id`] for dispatch order.
#[derive(Debug, Clone)]
pub struct Batch {
    pub outcomes: Vec<RequestOutcome>,
    pub elapsed: Duration,
}

impl Batch {
    pub fn new(outcomes: Vec<RequestOutcome>, elapsed: Duration) -> Self {
        Self { outcomes, elapsed }
    }

    pub fn by_id(&self) -> Vec<&RequestOutcome> {
        let mut sorted: Vec<_> = self.outcomes.iter().collect();
        sorted.sort_by_key(|o| o.id);
        sorted
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }
}
