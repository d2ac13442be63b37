//! Key catalogs for DataKey.
//!
//! A catalog stores built keys by [`CatalogId`](datakey_types::CatalogId)
//! and hands them back, typed, on lookup. Identity is the id alone: a second
//! key with an id that is already registered is always rejected.
//!
//! # Modules
//!
//! - [`error`] — Error types for catalog operations
//! - [`config`] — [`CatalogConfig`], loadable from TOML
//! - [`traits`] — The [`KeyCatalog`] trait defining the registry interface
//! - [`memory`] — In-memory [`InMemoryKeyCatalog`]

pub mod config;
pub mod error;
pub mod memory;
pub mod traits;

pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use memory::InMemoryKeyCatalog;
pub use traits::KeyCatalog;
