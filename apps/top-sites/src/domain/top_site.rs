//! Top site records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TopSiteId;

/// Where a top site came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopSiteKind {
    /// Built-in pin shipped with the browser.
    Default,
    /// Pin added by the user.
    Pinned,
    /// Computed from browsing frequency and recency.
    Frecent,
    /// Supplied by a remote top-sites provider.
    Provided,
}

impl TopSiteKind {
    /// Whether this kind is backed by a pin that storage can edit or delete.
    #[must_use]
    pub const fn is_pinned(self) -> bool {
        matches!(self, Self::Default | Self::Pinned)
    }
}

/// A top site as returned by storage.
///
/// Frecent records carry no id; storage targets them by url instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSite {
    /// Storage-assigned identity.
    pub id: Option<TopSiteId>,
    /// Kind of entry.
    pub kind: TopSiteKind,
    /// Display title.
    pub title: Option<String>,
    /// Site URL.
    pub url: String,
    /// When the entry was created, if storage tracks it.
    pub created_at: Option<DateTime<Utc>>,
}

impl TopSite {
    /// Create a pinned record (for storage adapters and tests).
    #[must_use]
    pub fn pinned(
        id: TopSiteId,
        title: impl Into<String>,
        url: impl Into<String>,
        is_default: bool,
    ) -> Self {
        Self {
            id: Some(id),
            kind: if is_default {
                TopSiteKind::Default
            } else {
                TopSiteKind::Pinned
            },
            title: Some(title.into()),
            url: url.into(),
            created_at: None,
        }
    }

    /// Create a frecent record, which has no storage id.
    #[must_use]
    pub fn frecent(title: Option<String>, url: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: TopSiteKind::Frecent,
            title,
            url: url.into(),
            created_at: None,
        }
    }

    /// Whether this record is a built-in default pin.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.kind == TopSiteKind::Default
    }
}

/// Request to pin a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedSite {
    /// Display title.
    pub title: String,
    /// Site URL.
    pub url: String,
    /// Marks a built-in pin rather than a user-added one.
    #[serde(default)]
    pub is_default: bool,
}

impl PinnedSite {
    /// Create a user pin.
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            is_default: false,
        }
    }

    /// Mark the pin as a built-in default.
    #[must_use]
    pub const fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}
