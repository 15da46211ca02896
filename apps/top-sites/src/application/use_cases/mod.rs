//! Application Use Cases
//!
//! One use case per top-site mutation, exposed through
//! [`TopSitesUseCases`].

mod add_pinned_site;
mod remove_top_site;
mod top_sites_use_cases;
mod update_top_site;

pub use add_pinned_site::AddPinnedSiteUseCase;
pub use remove_top_site::RemoveTopSiteUseCase;
pub use top_sites_use_cases::TopSitesUseCases;
pub use update_top_site::UpdateTopSiteUseCase;
