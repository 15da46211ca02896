//! Domain Layer
//!
//! Top-site records as seen by the use-case layer. The records themselves
//! are owned by the storage adapter; this layer only names them.
//!
//! - [`TopSite`]: a stored entry that can be removed or updated
//! - [`PinnedSite`]: the request to pin a new entry
//! - [`TopSiteId`]: storage-assigned identity

mod identifiers;
mod top_site;

pub use identifiers::TopSiteId;
pub use top_site::{PinnedSite, TopSite, TopSiteKind};
