#![forbid(unsafe_code)]

pub mod fixtures;
pub mod json;
pub mod repository;

pub use fixtures::FixtureCatalog;
pub use json::JsonFileCatalog;
pub use repository::{CatalogProvider, InMemoryCatalog, Storage, StorageError};
