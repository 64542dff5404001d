//! `GET /metrics`: Prometheus text exposition.
//!
//! Exposes process/runtime metrics plus a per-endpoint request counter. The
//! registry is process-wide and lazily initialized; handlers in sibling route
//! modules record into it through [`record_request`].

use std::sync::LazyLock;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use prometheus::{
    process_collector::ProcessCollector, Encoder, IntCounterVec, Opts, Registry, TextEncoder,
};
use tracing::error;

// ---

static HTTP_REQUESTS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new("http_requests_total", "HTTP requests served, by endpoint"),
        &["endpoint"],
    )
    .expect("request counter definition is valid")
});

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    // ---
    let registry = Registry::new();
    registry
        .register(Box::new(ProcessCollector::for_self()))
        .expect("process collector registers once");
    registry
        .register(Box::new(HTTP_REQUESTS.clone()))
        .expect("request counter registers once");
    registry
});

/// Count one served request against `endpoint`.
pub fn record_request(endpoint: &str) {
    HTTP_REQUESTS.with_label_values(&[endpoint]).inc();
}

// ---

async fn handler() -> impl IntoResponse {
    // ---
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&REGISTRY.gather(), &mut buffer) {
        error!("Failed to encode metrics: {}", e);
        return (StatusCode::INTERNAL_SERVER_ERROR, String::new()).into_response();
    }

    ([(header::CONTENT_TYPE, encoder.format_type())], buffer).into_response()
}

/// Create a subrouter containing the `/metrics` route, generic over the
/// gateway's state like the health subrouter.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/metrics", get(handler))
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn request_counter_accumulates_per_endpoint() {
        // ---
        let before = HTTP_REQUESTS.with_label_values(&["/api/aqi"]).get();
        record_request("/api/aqi");
        record_request("/api/aqi");
        record_request("/api/pm25s");

        assert_eq!(HTTP_REQUESTS.with_label_values(&["/api/aqi"]).get(), before + 2);
    }

    #[test]
    fn exposition_includes_registered_metrics() {
        // ---
        record_request("/healthcheck-test-label");

        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&REGISTRY.gather(), &mut buffer)
            .unwrap();
        let body = String::from_utf8(buffer).unwrap();

        assert!(body.contains("http_requests_total"));
    }
}
