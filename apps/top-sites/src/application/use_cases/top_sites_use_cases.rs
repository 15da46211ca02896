//! Top Sites Use Cases
//!
//! Facade binding the three top-site use cases to one storage instance.
//! Each use case is built on first access and reused for the lifetime of
//! the facade.

use std::sync::{Arc, OnceLock};

use super::{AddPinnedSiteUseCase, RemoveTopSiteUseCase, UpdateTopSiteUseCase};
use crate::application::ports::{TopSitesStorage, TopSitesTelemetry};
use crate::application::services::TaskScope;

/// Entry point for top-site mutations.
///
/// Construction does not touch storage.
pub struct TopSitesUseCases<S, T>
where
    S: TopSitesStorage + 'static,
    T: TopSitesTelemetry + 'static,
{
    storage: Arc<S>,
    telemetry: Arc<T>,
    scope: Arc<TaskScope>,
    add_pinned_sites: OnceLock<AddPinnedSiteUseCase<S, T>>,
    remove_top_sites: OnceLock<RemoveTopSiteUseCase<S>>,
    update_top_sites: OnceLock<UpdateTopSiteUseCase<S>>,
}

impl<S, T> TopSitesUseCases<S, T>
where
    S: TopSitesStorage + 'static,
    T: TopSitesTelemetry + 'static,
{
    /// Create the facade. Background telemetry runs on the tokio runtime
    /// current at the time of each add.
    #[must_use]
    pub fn new(storage: Arc<S>, telemetry: Arc<T>) -> Self {
        Self::with_scope(storage, telemetry, Arc::new(TaskScope::new()))
    }

    /// Create the facade with an explicit background task scope.
    #[must_use]
    pub const fn with_scope(storage: Arc<S>, telemetry: Arc<T>, scope: Arc<TaskScope>) -> Self {
        Self {
            storage,
            telemetry,
            scope,
            add_pinned_sites: OnceLock::new(),
            remove_top_sites: OnceLock::new(),
            update_top_sites: OnceLock::new(),
        }
    }

    /// Use case for pinning sites.
    pub fn add_pinned_sites(&self) -> &AddPinnedSiteUseCase<S, T> {
        self.add_pinned_sites.get_or_init(|| {
            AddPinnedSiteUseCase::new(
                Arc::clone(&self.storage),
                Arc::clone(&self.telemetry),
                Arc::clone(&self.scope),
            )
        })
    }

    /// Use case for removing top sites.
    pub fn remove_top_sites(&self) -> &RemoveTopSiteUseCase<S> {
        self.remove_top_sites
            .get_or_init(|| RemoveTopSiteUseCase::new(Arc::clone(&self.storage)))
    }

    /// Use case for updating top sites.
    pub fn update_top_sites(&self) -> &UpdateTopSiteUseCase<S> {
        self.update_top_sites
            .get_or_init(|| UpdateTopSiteUseCase::new(Arc::clone(&self.storage)))
    }

    /// Background scope the add use case reports through.
    ///
    /// Hosts and tests use it to await or cancel pending telemetry.
    pub fn scope(&self) -> &TaskScope {
        &self.scope
    }
}
