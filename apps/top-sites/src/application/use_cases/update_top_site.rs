//! Update Top Site Use Case

use std::sync::Arc;

use crate::application::ports::{StorageError, TopSitesStorage};
use crate::domain::TopSite;

/// Use case for renaming or re-pointing a top site.
pub struct UpdateTopSiteUseCase<S>
where
    S: TopSitesStorage,
{
    storage: Arc<S>,
}

impl<S> UpdateTopSiteUseCase<S>
where
    S: TopSitesStorage,
{
    pub(crate) const fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Replace the title and url of the given top site.
    ///
    /// Storage errors are returned unchanged.
    pub fn execute(&self, top_site: &TopSite, title: &str, url: &str) -> Result<(), StorageError> {
        self.storage.update_top_site(top_site, title, url)?;
        tracing::debug!(old_url = %top_site.url, new_url = url, "Updated top site");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockTopSitesStorage;
    use crate::domain::TopSiteId;
    use mockall::predicate::eq;

    #[test]
    fn update_forwards_new_title_and_url() {
        let site = TopSite::pinned(TopSiteId::new(5), "Old", "https://old.test", false);

        let mut storage = MockTopSitesStorage::new();
        storage
            .expect_update_top_site()
            .with(eq(site.clone()), eq("New"), eq("https://new.test"))
            .times(1)
            .returning(|_, _, _| Ok(()));
        storage.expect_top_sites_count().never();

        let use_case = UpdateTopSiteUseCase::new(Arc::new(storage));
        assert!(use_case.execute(&site, "New", "https://new.test").is_ok());
    }

    #[test]
    fn update_propagates_storage_error() {
        let site = TopSite::pinned(TopSiteId::new(5), "Old", "https://old.test", false);

        let mut storage = MockTopSitesStorage::new();
        storage.expect_update_top_site().returning(|_, _, _| {
            Err(StorageError::Unavailable {
                message: "locked".to_string(),
            })
        });

        let use_case = UpdateTopSiteUseCase::new(Arc::new(storage));
        let err = use_case.execute(&site, "New", "https://new.test").unwrap_err();
        assert!(matches!(err, StorageError::Unavailable { .. }));
    }
}
