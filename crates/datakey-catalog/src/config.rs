use std::path::Path;

use datakey_types::validate_namespace;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Configuration for a key catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Namespaces keys may be registered under. `None` allows any namespace.
    pub allowed_namespaces: Option<Vec<String>>,
    /// Maximum number of keys the catalog will hold.
    pub max_keys: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            allowed_namespaces: None,
            max_keys: 4096,
        }
    }
}

impl CatalogConfig {
    /// A configuration that only accepts keys from the given namespaces.
    pub fn restricted<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_namespaces: Some(namespaces.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| CatalogError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Check that every allowed namespace is well formed and the capacity is
    /// positive.
    pub fn validate(&self) -> Result<()> {
        if self.max_keys == 0 {
            return Err(CatalogError::Config("max_keys must be positive".into()));
        }
        for namespace in self.allowed_namespaces.iter().flatten() {
            validate_namespace(namespace).map_err(|e| CatalogError::Config(e.to_string()))?;
        }
        Ok(())
    }

    /// Whether keys under `namespace` may be registered.
    pub fn allows(&self, namespace: &str) -> bool {
        match &self.allowed_namespaces {
            None => true,
            Some(list) => list.iter().any(|n| n == namespace),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config() {
        let c = CatalogConfig::default();
        assert_eq!(c.max_keys, 4096);
        assert!(c.allowed_namespaces.is_none());
        assert!(c.allows("anything"));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn restricted_config() {
        let c = CatalogConfig::restricted(["sponge", "plugin"]);
        assert!(c.allows("sponge"));
        assert!(!c.allows("other"));
    }

    #[test]
    fn parse_toml() {
        let c = CatalogConfig::from_toml_str(
            r#"
            allowed_namespaces = ["sponge", "my-plugin"]
            max_keys = 16
            "#,
        )
        .unwrap();
        assert_eq!(c.max_keys, 16);
        assert!(c.allows("my-plugin"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let c = CatalogConfig::from_toml_str("max_keys = 3").unwrap();
        assert_eq!(c.max_keys, 3);
        assert!(c.allowed_namespaces.is_none());
        assert_eq!(CatalogConfig::from_toml_str("").unwrap(), CatalogConfig::default());
    }

    #[test]
    fn rejects_bad_namespace() {
        let err = CatalogConfig::from_toml_str(r#"allowed_namespaces = ["Bad Name"]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn rejects_zero_capacity() {
        assert!(CatalogConfig::from_toml_str("max_keys = 0").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            CatalogConfig::from_toml_str("max_keys = ").unwrap_err(),
            CatalogError::Config(_)
        ));
    }

    #[test]
    fn toml_roundtrip_through_file() {
        let config = CatalogConfig::restricted(["sponge"]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_toml_string().unwrap().as_bytes())
            .unwrap();
        let loaded = CatalogConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
