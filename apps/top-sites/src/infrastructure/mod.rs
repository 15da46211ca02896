//! Infrastructure Layer
//!
//! Adapters implementing the application ports.
//!
//! - `persistence`: In-memory top sites storage
//! - `telemetry`: Prometheus and recording telemetry sinks

pub mod persistence;
pub mod telemetry;
