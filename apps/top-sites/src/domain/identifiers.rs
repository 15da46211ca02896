//! Strongly-typed identifier for stored top sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned identity of a top site.
///
/// Opaque to the use-case layer: it is only ever handed back to the
/// storage adapter that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopSiteId(i64);

impl TopSiteId {
    /// Create an identifier from a raw storage key.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw storage key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TopSiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TopSiteId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
