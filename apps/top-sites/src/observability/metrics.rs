//! Prometheus metrics for top sites.

use std::sync::OnceLock;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Gauge holding the latest reported top-site count.
pub const TOP_SITES_COUNT: &str = "top_sites_count";

/// Counter of count facts emitted.
const TOP_SITES_COUNT_FACTS: &str = "top_sites_count_facts_total";

/// Component label attached to every top-site metric.
pub const COMPONENT: &str = "feature-top-sites";

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to install the Prometheus recorder.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

/// Install the Prometheus recorder as the global `metrics` recorder.
///
/// Repeated calls return the handle from the first install.
pub fn init_metrics() -> Result<PrometheusHandle, MetricsError> {
    if let Some(handle) = PROMETHEUS_HANDLE.get() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;
    register_metrics();

    Ok(PROMETHEUS_HANDLE.get_or_init(|| handle).clone())
}

fn register_metrics() {
    describe_gauge!(TOP_SITES_COUNT, "Number of stored top sites after the last pin");
    describe_counter!(TOP_SITES_COUNT_FACTS, "Top site count facts emitted");
}

/// Record the total number of top sites.
pub fn record_top_sites_count(count: usize) {
    gauge!(TOP_SITES_COUNT, "component" => COMPONENT).set(count as f64);
    counter!(TOP_SITES_COUNT_FACTS, "component" => COMPONENT).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_top_sites_count_sets_gauge() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || record_top_sites_count(7));

        let rendered = handle.render();
        let gauge_line = rendered
            .lines()
            .find(|l| l.starts_with("top_sites_count{"))
            .unwrap();
        assert!(gauge_line.contains("component=\"feature-top-sites\""));
        assert!(gauge_line.ends_with(" 7"));
        assert!(rendered.contains("top_sites_count_facts_total"));
    }
}
