use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> PrometheusHandle {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder");

    init_metric_descriptions();

    handle
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!("landing_quotes_total", "Total number of pricing quotes served");
    describe_counter!("landing_chat_replies_total", "Total number of chat replies by topic");
    describe_counter!(
        "landing_form_submissions_total",
        "Total number of mock form submissions by kind and outcome"
    );
    describe_histogram!(
        "landing_request_duration_seconds",
        "Request duration in seconds"
    );
    describe_gauge!("landing_service_info", "Service version information");

    gauge!("landing_service_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a served quote
pub fn record_quote(currency: &str, selected_modules: usize) {
    counter!(
        "landing_quotes_total",
        "currency" => currency.to_string(),
        "modules" => selected_modules.to_string(),
    )
    .increment(1);
}

/// Record a chat reply
pub fn record_chat_reply(topic: &str) {
    counter!("landing_chat_replies_total", "topic" => topic.to_string()).increment(1);
}

/// Record a form submission attempt
pub fn record_form_submission(kind: &str, outcome: &str) {
    counter!(
        "landing_form_submissions_total",
        "kind" => kind.to_string(),
        "outcome" => outcome.to_string(),
    )
    .increment(1);
}

/// Record request duration
pub fn record_duration(endpoint: &str, duration: Duration) {
    histogram!(
        "landing_request_duration_seconds",
        "endpoint" => endpoint.to_string(),
    )
    .record(duration.as_secs_f64());
}
