//! Telemetry Port (Driven Port)
//!
//! One-way sink for top-site facts. Observations are best-effort: the use
//! cases log and drop any error returned here.

use async_trait::async_trait;

/// Telemetry error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TelemetryError {
    /// Sink cannot accept observations right now.
    #[error("Telemetry sink unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Sink refused the observation.
    #[error("Telemetry observation rejected: {message}")]
    Rejected {
        /// Error details.
        message: String,
    },
}

/// Port for emitting top-site facts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopSitesTelemetry: Send + Sync {
    /// Record the total number of top sites.
    async fn record_top_sites_count(&self, count: usize) -> Result<(), TelemetryError>;
}

/// Telemetry sink that drops every observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpTelemetry;

#[async_trait]
impl TopSitesTelemetry for NoOpTelemetry {
    async fn record_top_sites_count(&self, _count: usize) -> Result<(), TelemetryError> {
        Ok(())
    }
}
