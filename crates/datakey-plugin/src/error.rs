use datakey_catalog::CatalogError;
use datakey_types::TypeError;
use thiserror::Error;

/// Errors produced while describing plugins or registering their keys.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("invalid plugin id: {0}")]
    InvalidId(#[from] TypeError),

    #[error("plugin metadata is missing its {field}")]
    Incomplete { field: &'static str },

    #[error("plugin name must not be empty")]
    EmptyName,

    /// A plugin declared a key outside its own namespace.
    #[error("plugin {plugin} cannot declare key {key} outside its namespace")]
    ForeignNamespace { plugin: String, key: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, PluginError>;
