//! Remove Top Site Use Case

use std::sync::Arc;

use crate::application::ports::{StorageError, TopSitesStorage};
use crate::domain::TopSite;

/// Use case for removing a top site.
pub struct RemoveTopSiteUseCase<S>
where
    S: TopSitesStorage,
{
    storage: Arc<S>,
}

impl<S> RemoveTopSiteUseCase<S>
where
    S: TopSitesStorage,
{
    pub(crate) const fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Remove the given top site.
    ///
    /// Storage errors are returned unchanged.
    pub fn execute(&self, top_site: &TopSite) -> Result<(), StorageError> {
        self.storage.remove_top_site(top_site)?;
        tracing::debug!(url = %top_site.url, kind = ?top_site.kind, "Removed top site");
        Ok(())
    }
}
