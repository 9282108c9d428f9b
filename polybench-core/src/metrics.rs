#[derive(Copy, Clone, Debug)]
pub struct RequestLabels {
    pub success: &'static str,
    pub error: &'static str,
    pub latency: &'static str,
}

pub const API_REQUEST_LABELS: RequestLabels = RequestLabels {
    success: "polybench_api_request_success",
    error: "polybench_api_request_error",
    latency: "polybench_api_request_latency",
};
