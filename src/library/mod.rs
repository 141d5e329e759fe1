//! In-memory catalog storage and the service layer on top of it.
//!
//! - [`store`]: the [`CatalogStore`] contract and its [`InMemoryStore`] backend
//! - [`service`]: duplicate prevention, validation and default-path persistence

pub mod service;
pub mod store;

pub use service::{CatalogService, CatalogStatistics, LoadSummary};
pub use store::{CatalogStore, InMemoryStore};
