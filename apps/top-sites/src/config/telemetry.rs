//! Telemetry sink configuration.

use serde::{Deserialize, Serialize};

/// Which sink receives top-site facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TelemetrySink {
    /// Drop every fact.
    Noop,
    /// Publish facts as Prometheus metrics.
    #[default]
    Metrics,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Master switch; `false` behaves like the `noop` sink.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Sink selection.
    #[serde(default)]
    pub sink: TelemetrySink,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sink: TelemetrySink::default(),
        }
    }
}

impl TelemetryConfig {
    /// The sink actually in effect after applying `enabled`.
    #[must_use]
    pub const fn effective_sink(&self) -> TelemetrySink {
        if self.enabled {
            self.sink
        } else {
            TelemetrySink::Noop
        }
    }
}

const fn default_enabled() -> bool {
    true
}
