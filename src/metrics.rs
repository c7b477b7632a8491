use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("relay_requests_total", "Total number of relay requests").unwrap();
    pub static ref RATE_LIMITED: Counter = register_counter!(
        "relay_rate_limited_total",
        "Requests rejected by the rate limiter"
    )
    .unwrap();
    pub static ref DELIVERY_FAILURES: Counter = register_counter!(
        "relay_delivery_failures_total",
        "Relay requests that failed downstream delivery"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "relay_request_latency_seconds",
        "Relay request latency in seconds"
    )
    .unwrap();
}
