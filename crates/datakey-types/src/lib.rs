//! Foundation types for DataKey.
//!
//! This crate provides the identity and addressing types shared by every
//! other DataKey crate. Nothing here knows about keys or values; it only
//! defines what a well-formed identifier and a structured path look like.
//!
//! # Key Types
//!
//! - [`CatalogId`] — Validated `namespace:value` identifier
//! - [`CatalogType`] — Anything addressable by a [`CatalogId`] in a catalog
//! - [`DataQuery`] — Hierarchical locator into a serialized document
//! - [`ResettableBuilder`] — Builders that can be reset or seeded from a template

pub mod builder;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod query;

pub use builder::ResettableBuilder;
pub use catalog::CatalogType;
pub use error::{Result, TypeError};
pub use ids::{validate_catalog_id, validate_namespace, validate_plugin_id, CatalogId};
pub use query::DataQuery;
