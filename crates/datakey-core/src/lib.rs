//! Typed keys and value wrappers for DataKey.
//!
//! A [`Key`] labels a category of data and is statically bound to the
//! [`BaseValue`] wrapper type that answers it. Keys are only ever produced by
//! [`KeyBuilder::build`], which refuses to create a key whose id, name or
//! query is missing or malformed.
//!
//! # Architecture
//!
//! - **Value wrappers** are read-only views over an optional stored value and
//!   a mandatory default. [`Value`] and [`ListValue`] are the stock wrappers.
//! - **Keys** are immutable descriptors. Identity is the [`CatalogId`]; the
//!   wrapper type is a compile-time parameter, so the element type is always
//!   recoverable as `V::Element`.
//! - **The builder** is a typestate: `build()` only exists once the wrapper
//!   type has been bound with [`KeyBuilder::of_type`].
//! - **Containers** implement [`ValueContainer`] to answer "the wrapper for
//!   key K on this holder".
//!
//! # Example
//!
//! ```
//! use datakey_core::{BaseValue, DataQuery, KeyBuilder, Value};
//!
//! let key = KeyBuilder::new()
//!     .of_type::<Value<String>>()
//!     .id("plugin:example_key")
//!     .name("Example Key")
//!     .query(DataQuery::parse("data.example"))
//!     .build()
//!     .unwrap();
//! assert_eq!(key.id().as_str(), "plugin:example_key");
//!
//! let value = Value::new(key.clone(), "fallback".to_string());
//! assert!(!value.exists());
//! assert_eq!(value.get(), "fallback");
//! ```

pub mod builder;
pub mod container;
pub mod error;
pub mod key;
pub mod value;

pub use builder::{KeyBuilder, Typed, Untyped};
pub use container::ValueContainer;
pub use error::{KeyError, KeyField, Result};
pub use key::{ErasedKey, Key, TypeBinding};
pub use value::{BaseValue, ListValue, Value};

pub use datakey_types::{CatalogId, CatalogType, DataQuery};
