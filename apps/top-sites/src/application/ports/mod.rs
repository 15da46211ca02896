//! Application Ports (Driven)
//!
//! Interfaces the use cases call out through. Adapters live in
//! `infrastructure`.

mod telemetry_port;
mod top_sites_storage_port;

pub use telemetry_port::{NoOpTelemetry, TelemetryError, TopSitesTelemetry};
pub use top_sites_storage_port::{StorageError, TopSitesStorage};

#[cfg(test)]
pub use telemetry_port::MockTopSitesTelemetry;
#[cfg(test)]
pub use top_sites_storage_port::MockTopSitesStorage;
