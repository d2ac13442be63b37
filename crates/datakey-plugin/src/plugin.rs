//! The [`Plugin`] entry-point trait.

use datakey_catalog::KeyCatalog;
use datakey_core::ErasedKey;
use tracing::debug;

use crate::error::{PluginError, Result};
use crate::metadata::PluginMetadata;

/// Marks the type that serves as a plugin's entry point.
pub trait Plugin {
    fn metadata(&self) -> &PluginMetadata;

    /// Keys this plugin contributes. Every key must live in the plugin's
    /// namespace.
    fn keys(&self) -> Vec<ErasedKey> {
        Vec::new()
    }
}

/// Register every key a plugin declares.
///
/// All keys are checked against the plugin's namespace before any is
/// registered. Registration then stops at the first catalog error; keys
/// registered before it stay registered.
pub fn register_plugin_keys<P, C>(plugin: &P, catalog: &C) -> Result<usize>
where
    P: Plugin + ?Sized,
    C: KeyCatalog + ?Sized,
{
    let meta = plugin.metadata();
    let keys = plugin.keys();

    if let Some(foreign) = keys.iter().find(|k| k.id().namespace() != meta.id()) {
        return Err(PluginError::ForeignNamespace {
            plugin: meta.id().to_string(),
            key: foreign.id().to_string(),
        });
    }

    let count = keys.len();
    for key in keys {
        catalog.register(key)?;
    }
    debug!(plugin = meta.id(), keys = count, "registered plugin keys");
    Ok(count)
}
