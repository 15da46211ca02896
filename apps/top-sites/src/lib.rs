// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::needless_pass_by_value
    )
)]

//! Top Sites - Use Case Layer
//!
//! Operations for managing a user's pinned and top-visited sites: pin a
//! site, remove a site, update a site's title and url. The layer sits
//! between UI callers and a storage engine that owns persistence and
//! ranking.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: `TopSite`, `PinnedSite` and their identity
//! - **Application**: Ports (`TopSitesStorage`, `TopSitesTelemetry`),
//!   use cases and the `TopSitesUseCases` facade, background task scope
//! - **Infrastructure**: In-memory storage and telemetry sinks
//!
//! # Side Effects
//!
//! Every mutation calls storage synchronously on the caller's context.
//! Pinning additionally launches a background task that reads the new
//! top-site count and reports it to telemetry; failures there are logged
//! and never reach the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Top site records.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Storage and telemetry adapters.
pub mod infrastructure;

/// Configuration loading.
pub mod config;

/// Logging and metrics setup.
pub mod observability;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::{
    AddPinnedSiteUseCase, NoOpTelemetry, RemoveTopSiteUseCase, StorageError, TaskScope,
    TelemetryError, TopSitesStorage, TopSitesTelemetry, TopSitesUseCases, UpdateTopSiteUseCase,
};
pub use domain::{PinnedSite, TopSite, TopSiteId, TopSiteKind};
pub use infrastructure::persistence::{InMemoryTopSitesStorage, StorageOperation};
pub use infrastructure::telemetry::{MetricsTelemetry, RecordingTelemetry};
