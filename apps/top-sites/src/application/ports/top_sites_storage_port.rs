//! Top Sites Storage Port (Driven Port)
//!
//! Interface to the component that persists pinned sites and merges them
//! with computed top sites. Calls are synchronous: they run on the
//! caller's context and return once storage has completed.

use crate::domain::{TopSite, TopSiteId};

/// Storage error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No stored record has this id.
    #[error("Top site not found: {id}")]
    NotFound {
        /// Id that was looked up.
        id: TopSiteId,
    },

    /// Storage cannot be reached right now.
    #[error("Top sites storage unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Backend rejected or failed the operation.
    #[error("Top sites storage error: {message}")]
    Backend {
        /// Error details.
        message: String,
    },
}

/// Port for top site persistence.
#[cfg_attr(test, mockall::automock)]
pub trait TopSitesStorage: Send + Sync {
    /// Pin a site.
    fn add_top_site(&self, title: &str, url: &str, is_default: bool) -> Result<(), StorageError>;

    /// Remove a previously returned top site.
    fn remove_top_site(&self, top_site: &TopSite) -> Result<(), StorageError>;

    /// Replace the title and url of a previously returned top site.
    fn update_top_site(&self, top_site: &TopSite, title: &str, url: &str)
    -> Result<(), StorageError>;

    /// Total number of stored top sites.
    fn top_sites_count(&self) -> Result<usize, StorageError>;

    /// All stored top sites.
    fn top_sites(&self) -> Result<Vec<TopSite>, StorageError>;
}
