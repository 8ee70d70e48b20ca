use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("chat_requests_total", "Total number of chat invocations").unwrap();
    pub static ref FAILURE_TOTAL: Counter =
        register_counter!("chat_failures_total", "Invocations that ended in an error response").unwrap();
    pub static ref UPSTREAM_LATENCY: Histogram = register_histogram!(
        "chat_upstream_latency_seconds",
        "Generation endpoint latency in seconds"
    )
    .unwrap();
}
