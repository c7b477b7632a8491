use serde::{Deserialize, Serialize};

// Incoming submission - both fields checked by the handler so that a
// missing one yields the relay's own 400 body, not an extractor rejection
#[derive(Deserialize, Clone, Copy)]
pub struct LocationRequest {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelaySuccess {
    pub success: bool,
    pub timestamp: String,
    pub formatted_timestamp: String,
    pub requests_remaining: u32,
    pub rate_limit_reset: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitedResponse {
    pub error: &'static str,
    pub timestamp: String,
    pub formatted_retry_after: String,
    pub retry_after_ms: u64,
}

// 400 and 405 bodies share this shape
#[derive(Serialize)]
pub struct RequestError {
    pub error: &'static str,
    pub timestamp: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayFailure {
    pub error: &'static str,
    pub timestamp: String,
    pub details: String,
    pub formatted_error_time: String,
}
