//! Plugin entry points for DataKey.
//!
//! A plugin is identified by an id that doubles as the namespace of every key
//! it declares. [`PluginMetadata`] carries that id plus descriptive fields;
//! the [`Plugin`] trait marks the type that serves as a plugin's entry point
//! and lists the keys it contributes.
//!
//! Discovering and loading plugins is out of scope: callers hand plugin
//! instances to [`register_plugin_keys`] themselves.

pub mod error;
pub mod metadata;
pub mod plugin;

pub use error::{PluginError, Result};
pub use metadata::{PluginMetadata, PluginMetadataBuilder};
pub use plugin::{register_plugin_keys, Plugin};
