//! Plugin metadata and its builder.

use datakey_core::{KeyBuilder, Untyped};
use datakey_types::{validate_plugin_id, CatalogId, ResettableBuilder};
use serde::Serialize;

use crate::error::{PluginError, Result};

/// Descriptive metadata for a plugin.
///
/// The id must match the plugin id pattern (a lowercase letter followed by 1
/// to 63 characters from `[a-z0-9_-]`) and is the namespace of every key the
/// plugin declares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PluginMetadata {
    id: String,
    name: String,
    version: Option<String>,
    description: Option<String>,
    authors: Vec<String>,
}

impl PluginMetadata {
    pub fn builder() -> PluginMetadataBuilder {
        PluginMetadataBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name. Defaults to the id when none was given.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// The catalog id `<plugin id>:<value>`.
    pub fn key_id(&self, value: &str) -> Result<CatalogId> {
        Ok(CatalogId::new(&self.id, value)?)
    }

    /// A fresh key builder whose id is `<plugin id>:<value>`. The id is
    /// validated when the key is built.
    pub fn key_builder(&self, value: &str) -> KeyBuilder<Untyped> {
        KeyBuilder::new().id(format!("{}:{}", self.id, value))
    }
}

/// Builder for [`PluginMetadata`].
///
/// Unlike key builders, metadata builders may be seeded from existing
/// metadata, e.g. to describe a new version of the same plugin.
#[derive(Clone, Debug, Default)]
pub struct PluginMetadataBuilder {
    id: Option<String>,
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    authors: Vec<String>,
}

impl PluginMetadataBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an author. Authors accumulate.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    pub fn build(self) -> Result<PluginMetadata> {
        let id = self.id.ok_or(PluginError::Incomplete { field: "id" })?;
        validate_plugin_id(&id)?;

        let name = match self.name {
            Some(name) if name.trim().is_empty() => return Err(PluginError::EmptyName),
            Some(name) => name,
            None => id.clone(),
        };

        Ok(PluginMetadata {
            id,
            name,
            version: self.version,
            description: self.description,
            authors: self.authors,
        })
    }
}

impl ResettableBuilder<PluginMetadata> for PluginMetadataBuilder {
    fn from_template(self, template: &PluginMetadata) -> Self {
        Self {
            id: Some(template.id.clone()),
            name: Some(template.name.clone()),
            version: template.version.clone(),
            description: template.description.clone(),
            authors: template.authors.clone(),
        }
    }

    fn reset(self) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datakey_core::{DataQuery, KeyError, Value};

    fn example() -> PluginMetadata {
        PluginMetadata::builder()
            .id("example")
            .name("Example Plugin")
            .version("1.2.0")
            .description("Adds example data")
            .author("alice")
            .author("bob")
            .build()
            .unwrap()
    }

    #[test]
    fn builds_full_metadata() {
        let meta = example();
        assert_eq!(meta.id(), "example");
        assert_eq!(meta.name(), "Example Plugin");
        assert_eq!(meta.version(), Some("1.2.0"));
        assert_eq!(meta.description(), Some("Adds example data"));
        assert_eq!(meta.authors(), &["alice".to_string(), "bob".to_string()]);
    }

    #[test]
    fn name_defaults_to_id() {
        let meta = PluginMetadata::builder().id("bare").build().unwrap();
        assert_eq!(meta.name(), "bare");
        assert_eq!(meta.version(), None);
    }

    #[test]
    fn missing_id_is_incomplete() {
        let err = PluginMetadata::builder().name("No Id").build().unwrap_err();
        assert!(matches!(err, PluginError::Incomplete { field: "id" }));
    }

    #[test]
    fn invalid_id_is_rejected() {
        for id in ["X", "1abc", "has space", "dotted.id"] {
            let err = PluginMetadata::builder().id(id).build().unwrap_err();
            assert!(matches!(err, PluginError::InvalidId(_)), "{id}");
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = PluginMetadata::builder()
            .id("example")
            .name(" ")
            .build()
            .unwrap_err();
        assert!(matches!(err, PluginError::EmptyName));
    }

    #[test]
    fn from_template_copies_every_field() {
        let original = example();
        let next = PluginMetadata::builder()
            .from_template(&original)
            .version("2.0.0")
            .build()
            .unwrap();
        assert_eq!(next.id(), original.id());
        assert_eq!(next.authors(), original.authors());
        assert_eq!(next.version(), Some("2.0.0"));
    }

    #[test]
    fn reset_clears_fields() {
        let err = PluginMetadata::builder()
            .from_template(&example())
            .reset()
            .build()
            .unwrap_err();
        assert!(matches!(err, PluginError::Incomplete { .. }));
    }

    #[test]
    fn key_id_is_namespaced() {
        let id = example().key_id("score").unwrap();
        assert_eq!(id.as_str(), "example:score");
        assert_eq!(id.namespace(), "example");
        assert!(example().key_id("Bad Value").is_err());
    }

    #[test]
    fn key_builder_seeds_namespaced_id() {
        let key = example()
            .key_builder("score")
            .of_type::<Value<u32>>()
            .name("Score")
            .query(DataQuery::parse("stats.score"))
            .build()
            .unwrap();
        assert_eq!(key.id().as_str(), "example:score");
    }

    #[test]
    fn key_builder_still_validates_at_build() {
        let err = example()
            .key_builder("Not Valid")
            .of_type::<Value<u32>>()
            .name("Score")
            .query(DataQuery::parse("stats.score"))
            .build()
            .unwrap_err();
        assert!(matches!(err, KeyError::InvalidId(_)));
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(example()).unwrap();
        assert_eq!(json["id"], "example");
        assert_eq!(json["authors"][1], "bob");
    }
}
