//! Prometheus metrics for the student marks server.

use metrics::counter;

/// Initialize metrics exporter (Prometheus).
pub fn init_metrics() {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    if let Err(e) = builder.install() {
        tracing::warn!("Failed to install Prometheus exporter: {}", e);
    }
}

/// Record a successful create/update/delete.
pub fn student_saved(op: &str) {
    counter!("marks_students_saved_total", "op" => op.to_string()).increment(1);
}

/// Record a list request that carried a search term.
pub fn search_performed() {
    counter!("marks_searches_total").increment(1);
}

/// Record a request that ended in an error.
pub fn request_failed(kind: &str) {
    counter!("marks_request_errors_total", "kind" => kind.to_string()).increment(1);
}
