//! Observability module for logging and metrics.
//!
//! The library only emits `tracing` events and `metrics` samples; the
//! binary installs the subscriber and the Prometheus recorder.

mod logging;
mod metrics;

pub use self::logging::{LoggingError, init_logging};
pub use self::metrics::{
    COMPONENT, MetricsError, TOP_SITES_COUNT, init_metrics,
    record_top_sites_count,
};
