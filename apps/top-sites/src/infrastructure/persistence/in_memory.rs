//! In-memory top sites storage.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::{Mutex, RwLock};

use crate::application::ports::{StorageError, TopSitesStorage};
use crate::domain::{TopSite, TopSiteId};

/// Storage operation that can be made to fail (for test setup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageOperation {
    /// `add_top_site`.
    Add,
    /// `remove_top_site`.
    Remove,
    /// `update_top_site`.
    Update,
    /// `top_sites_count`.
    Count,
    /// `top_sites`.
    List,
}

#[derive(Debug, Default)]
struct State {
    next_id: i64,
    sites: Vec<TopSite>,
}

/// In-memory implementation of `TopSitesStorage`.
///
/// Holds pinned and default sites only; there is no browsing history, so
/// removing or updating a frecent site is a no-op. Suitable for testing and
/// development.
#[derive(Debug, Default)]
pub struct InMemoryTopSitesStorage {
    state: RwLock<State>,
    failures: Mutex<HashMap<StorageOperation, StorageError>>,
}

impl InMemoryTopSitesStorage {
    /// Create a new empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record as-is (for test setup). Frecent records are accepted
    /// and counted but never targeted by id.
    pub fn insert(&self, site: TopSite) {
        self.state.write().sites.push(site);
    }

    /// Make the next call of `operation` fail with `error`.
    pub fn fail_next(&self, operation: StorageOperation, error: StorageError) {
        self.failures.lock().insert(operation, error);
    }

    fn take_failure(&self, operation: StorageOperation) -> Result<(), StorageError> {
        self.failures.lock().remove(&operation).map_or(Ok(()), Err)
    }
}

impl TopSitesStorage for InMemoryTopSitesStorage {
    fn add_top_site(&self, title: &str, url: &str, is_default: bool) -> Result<(), StorageError> {
        self.take_failure(StorageOperation::Add)?;

        let mut state = self.state.write();
        state.next_id += 1;
        let mut site = TopSite::pinned(TopSiteId::new(state.next_id), title, url, is_default);
        site.created_at = Some(Utc::now());
        state.sites.push(site);
        Ok(())
    }

    fn remove_top_site(&self, top_site: &TopSite) -> Result<(), StorageError> {
        self.take_failure(StorageOperation::Remove)?;

        let Some(id) = top_site.id.filter(|_| top_site.kind.is_pinned()) else {
            return Ok(());
        };

        let mut state = self.state.write();
        let index = state
            .sites
            .iter()
            .position(|s| s.id == Some(id))
            .ok_or(StorageError::NotFound { id })?;
        state.sites.remove(index);
        Ok(())
    }

    fn update_top_site(
        &self,
        top_site: &TopSite,
        title: &str,
        url: &str,
    ) -> Result<(), StorageError> {
        self.take_failure(StorageOperation::Update)?;

        let Some(id) = top_site.id.filter(|_| top_site.kind.is_pinned()) else {
            return Ok(());
        };

        let mut state = self.state.write();
        let site = state
            .sites
            .iter_mut()
            .find(|s| s.id == Some(id))
            .ok_or(StorageError::NotFound { id })?;
        site.title = Some(title.to_string());
        site.url = url.to_string();
        Ok(())
    }

    fn top_sites_count(&self) -> Result<usize, StorageError> {
        self.take_failure(StorageOperation::Count)?;
        Ok(self.state.read().sites.len())
    }

    fn top_sites(&self) -> Result<Vec<TopSite>, StorageError> {
        self.take_failure(StorageOperation::List)?;
        Ok(self.state.read().sites.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TopSiteKind;

    fn only_site(storage: &InMemoryTopSitesStorage) -> TopSite {
        let sites = storage.top_sites().unwrap();
        assert_eq!(sites.len(), 1);
        sites.into_iter().next().unwrap()
    }

    #[test]
    fn add_assigns_id_and_kind() {
        let storage = InMemoryTopSitesStorage::new();
        storage.add_top_site("Mozilla", "https://www.mozilla.org", true).unwrap();

        let site = only_site(&storage);
        assert_eq!(site.id, Some(TopSiteId::new(1)));
        assert_eq!(site.kind, TopSiteKind::Default);
        assert!(site.created_at.is_some());
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let storage = InMemoryTopSitesStorage::new();
        storage.add_top_site("A", "https://a.test", false).unwrap();
        let first = only_site(&storage);
        storage.remove_top_site(&first).unwrap();

        storage.add_top_site("B", "https://b.test", false).unwrap();
        assert_eq!(only_site(&storage).id, Some(TopSiteId::new(2)));
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let storage = InMemoryTopSitesStorage::new();
        let ghost = TopSite::pinned(TopSiteId::new(99), "Ghost", "https://ghost.test", false);

        let err = storage.remove_top_site(&ghost).unwrap_err();
        assert_eq!(
            err,
            StorageError::NotFound {
                id: TopSiteId::new(99)
            }
        );
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let storage = InMemoryTopSitesStorage::new();
        let ghost = TopSite::pinned(TopSiteId::new(7), "Ghost", "https://ghost.test", false);

        assert!(storage.update_top_site(&ghost, "T", "https://t.test").is_err());
    }

    #[test]
    fn frecent_sites_are_not_editable() {
        let storage = InMemoryTopSitesStorage::new();
        let frecent = TopSite::frecent(Some("News".to_string()), "https://news.test");
        storage.insert(frecent.clone());

        storage.update_top_site(&frecent, "Other", "https://other.test").unwrap();
        storage.remove_top_site(&frecent).unwrap();

        assert_eq!(only_site(&storage), frecent);
    }

    #[test]
    fn injected_failure_fires_once() {
        let storage = InMemoryTopSitesStorage::new();
        storage.fail_next(
            StorageOperation::Count,
            StorageError::Unavailable {
                message: "closed".to_string(),
            },
        );

        assert!(storage.top_sites_count().is_err());
        assert_eq!(storage.top_sites_count().unwrap(), 0);
    }
}
