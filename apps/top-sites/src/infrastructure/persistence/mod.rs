//! Persistence Adapters
//!
//! Storage implementations of [`TopSitesStorage`](crate::application::ports::TopSitesStorage).

pub mod in_memory;

pub use in_memory::{InMemoryTopSitesStorage, StorageOperation};
