//! Telemetry Adapters
//!
//! Sinks implementing [`TopSitesTelemetry`].
//!
//! - [`MetricsTelemetry`]: publishes the count as a Prometheus gauge
//! - [`RecordingTelemetry`]: keeps observations in memory (tests, demos)

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::application::ports::{TelemetryError, TopSitesTelemetry};
use crate::observability;

/// Telemetry sink backed by the `metrics` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsTelemetry;

#[async_trait]
impl TopSitesTelemetry for MetricsTelemetry {
    async fn record_top_sites_count(&self, count: usize) -> Result<(), TelemetryError> {
        observability::record_top_sites_count(count);
        Ok(())
    }
}

/// Telemetry sink that stores every observation.
#[derive(Debug, Default)]
pub struct RecordingTelemetry {
    observations: Mutex<Vec<usize>>,
    failure: Option<TelemetryError>,
}

impl RecordingTelemetry {
    /// Create a sink that accepts every observation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that stores each observation and then returns `error`.
    #[must_use]
    pub fn failing(error: TelemetryError) -> Self {
        Self {
            observations: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    /// Observations received so far, in arrival order.
    #[must_use]
    pub fn observations(&self) -> Vec<usize> {
        self.observations.lock().clone()
    }
}

#[async_trait]
impl TopSitesTelemetry for RecordingTelemetry {
    async fn record_top_sites_count(&self, count: usize) -> Result<(), TelemetryError> {
        self.observations.lock().push(count);
        self.failure.clone().map_or(Ok(()), Err)
    }
}
