//! The typestate [`KeyBuilder`].
//!
//! A builder starts [`Untyped`]. [`KeyBuilder::of_type`] binds the wrapper
//! type and moves it to [`Typed<V>`]; only a typed builder has `build()`, so
//! a key without a type binding cannot be expressed:
//!
//! ```compile_fail
//! use datakey_core::{DataQuery, KeyBuilder};
//!
//! let key = KeyBuilder::new()
//!     .id("plugin:example_key")
//!     .name("Example Key")
//!     .query(DataQuery::parse("data.example"))
//!     .build();
//! ```
//!
//! The id, name and query setters are available in every state, in any order,
//! and the last call wins. Their presence and validity are checked by
//! `build()`, which consumes the builder.
//!
//! `KeyBuilder` deliberately does not implement
//! [`ResettableBuilder`](datakey_types::ResettableBuilder): a key's identity is
//! declared once and never derived from an existing key.
//!
//! ```compile_fail
//! use datakey_core::{Key, KeyBuilder, Value};
//! use datakey_types::ResettableBuilder;
//!
//! fn duplicate(key: &Key<Value<String>>) {
//!     let _ = KeyBuilder::new().of_type::<Value<String>>().from_template(key);
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;

use datakey_types::{CatalogId, DataQuery};
use tracing::debug;

use crate::error::{KeyError, KeyField, Result};
use crate::key::Key;
use crate::value::BaseValue;

/// Builder state before a wrapper type is bound.
#[derive(Debug)]
pub struct Untyped;

/// Builder state once bound to wrapper type `V`.
pub struct Typed<V>(PhantomData<fn() -> V>);

/// Single-use staging area for a [`Key`].
pub struct KeyBuilder<S = Untyped> {
    id: Option<String>,
    name: Option<String>,
    query: Option<DataQuery>,
    _state: PhantomData<S>,
}

impl KeyBuilder<Untyped> {
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            query: None,
            _state: PhantomData,
        }
    }
}

impl Default for KeyBuilder<Untyped> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> KeyBuilder<S> {
    /// Bind the builder to wrapper type `V`. Fields supplied so far are kept.
    /// Calling this again re-binds to the new type.
    pub fn of_type<V: BaseValue>(self) -> KeyBuilder<Typed<V>> {
        KeyBuilder {
            id: self.id,
            name: self.name,
            query: self.query,
            _state: PhantomData,
        }
    }

    /// Set the catalog id. Validated by `build()`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the human-readable name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the recommended query for the key's value.
    pub fn query(mut self, query: DataQuery) -> Self {
        self.query = Some(query);
        self
    }
}

impl<V: BaseValue> KeyBuilder<Typed<V>> {
    /// Freeze the staged fields into a new key.
    ///
    /// Fails with [`KeyError::Incomplete`] if any of id, name or query was
    /// never supplied, [`KeyError::InvalidId`] if the id is malformed, and
    /// [`KeyError::EmptyName`] if the name is blank.
    pub fn build(self) -> Result<Key<V>> {
        let (id, name, query) = match (self.id, self.name, self.query) {
            (Some(id), Some(name), Some(query)) => (id, name, query),
            (id, name, query) => {
                let missing = [
                    (id.is_none(), KeyField::Id),
                    (name.is_none(), KeyField::Name),
                    (query.is_none(), KeyField::Query),
                ]
                .into_iter()
                .filter_map(|(absent, field)| absent.then_some(field))
                .collect();
                return Err(KeyError::Incomplete { missing });
            }
        };

        let id = CatalogId::parse(id)?;
        if name.trim().is_empty() {
            return Err(KeyError::EmptyName);
        }

        let key = Key::new(id, name, query);
        debug!(
            id = %key.id(),
            value_type = key.value_type_name(),
            "built key"
        );
        Ok(key)
    }
}

impl<S> fmt::Debug for KeyBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBuilder")
            .field("state", &std::any::type_name::<S>())
            .field("id", &self.id)
            .field("name", &self.name)
            .field("query", &self.query)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ListValue, Value};
    use datakey_types::TypeError;

    #[test]
    fn builds_example_key() {
        let key = KeyBuilder::new()
            .of_type::<Value<String>>()
            .id("plugin:example_key")
            .name("Example Key")
            .query(DataQuery::parse("data.example"))
            .build()
            .unwrap();
        assert_eq!(key.id().as_str(), "plugin:example_key");
        assert_eq!(key.name(), "Example Key");
        assert_eq!(key.query().to_string(), "data.example");
    }

    #[test]
    fn default_builder_starts_untyped() {
        let key = KeyBuilder::default()
            .id("plugin:example_key")
            .name("Example Key")
            .query(DataQuery::parse("data.example"))
            .of_type::<ListValue<u8>>()
            .build()
            .unwrap();
        assert!(key.binding().is::<ListValue<u8>>());
    }

    #[test]
    fn field_order_is_irrelevant() {
        let key = KeyBuilder::new()
            .query(DataQuery::parse("data.example"))
            .name("Example Key")
            .id("plugin:example_key")
            .of_type::<Value<String>>()
            .build()
            .unwrap();
        assert_eq!(key.id().as_str(), "plugin:example_key");

        let key = KeyBuilder::new()
            .name("Example Key")
            .of_type::<Value<String>>()
            .query(DataQuery::parse("data.example"))
            .id("plugin:example_key")
            .build()
            .unwrap();
        assert_eq!(key.name(), "Example Key");
    }

    #[test]
    fn missing_id_is_incomplete() {
        let err = KeyBuilder::new()
            .of_type::<Value<String>>()
            .name("Example Key")
            .query(DataQuery::parse("data.example"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            KeyError::Incomplete {
                missing: vec![KeyField::Id]
            }
        );
    }

    #[test]
    fn missing_name_is_incomplete() {
        let err = KeyBuilder::new()
            .of_type::<Value<String>>()
            .id("plugin:example_key")
            .query(DataQuery::parse("data.example"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            KeyError::Incomplete {
                missing: vec![KeyField::Name]
            }
        );
    }

    #[test]
    fn missing_query_is_incomplete() {
        let err = KeyBuilder::new()
            .of_type::<Value<String>>()
            .id("plugin:example_key")
            .name("Example Key")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            KeyError::Incomplete {
                missing: vec![KeyField::Query]
            }
        );
    }

    #[test]
    fn bare_typed_builder_reports_all_missing_fields() {
        let err = KeyBuilder::new()
            .of_type::<Value<String>>()
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            KeyError::Incomplete {
                missing: vec![KeyField::Id, KeyField::Name, KeyField::Query]
            }
        );
    }

    #[test]
    fn incomplete_is_reported_before_malformed_id() {
        let err = KeyBuilder::new()
            .of_type::<Value<String>>()
            .id("Not An Id")
            .build()
            .unwrap_err();
        assert!(matches!(err, KeyError::Incomplete { .. }));
    }

    #[test]
    fn malformed_id_fails_at_build() {
        let err = KeyBuilder::new()
            .of_type::<Value<String>>()
            .id("Example Key")
            .name("Example Key")
            .query(DataQuery::parse("data.example"))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            KeyError::InvalidId(TypeError::InvalidId { .. })
        ));
    }

    #[test]
    fn blank_name_is_rejected() {
        for name in ["", "   "] {
            let err = KeyBuilder::new()
                .of_type::<Value<String>>()
                .id("plugin:example_key")
                .name(name)
                .query(DataQuery::parse("data.example"))
                .build()
                .unwrap_err();
            assert_eq!(err, KeyError::EmptyName);
        }
    }

    #[test]
    fn last_setter_call_wins() {
        let key = KeyBuilder::new()
            .of_type::<Value<String>>()
            .id("plugin:first")
            .name("First")
            .query(DataQuery::parse("first"))
            .id("plugin:second")
            .name("Second")
            .query(DataQuery::parse("second.path"))
            .build()
            .unwrap();
        assert_eq!(key.id().as_str(), "plugin:second");
        assert_eq!(key.name(), "Second");
        assert_eq!(key.query(), &DataQuery::parse("second.path"));
    }

    #[test]
    fn malformed_id_can_be_replaced_before_build() {
        let key = KeyBuilder::new()
            .of_type::<Value<bool>>()
            .id("bad id")
            .id("plugin:flag")
            .name("Flag")
            .query(DataQuery::parse("flag"))
            .build()
            .unwrap();
        assert_eq!(key.id().as_str(), "plugin:flag");
    }

    #[test]
    fn of_type_rebinds_and_keeps_fields() {
        let key = KeyBuilder::new()
            .id("plugin:scores")
            .of_type::<Value<String>>()
            .name("Scores")
            .query(DataQuery::parse("scores"))
            .of_type::<ListValue<i64>>()
            .build()
            .unwrap();
        assert!(key.binding().is::<ListValue<i64>>());
        assert_eq!(key.name(), "Scores");
    }

    #[test]
    fn empty_query_is_accepted() {
        let key = KeyBuilder::new()
            .of_type::<Value<u8>>()
            .id("plugin:root")
            .name("Root")
            .query(DataQuery::empty())
            .build()
            .unwrap();
        assert!(key.query().is_empty());
    }

    #[test]
    fn debug_shows_state_and_fields() {
        let builder = KeyBuilder::new().of_type::<Value<String>>().id("plugin:x");
        let dbg = format!("{builder:?}");
        assert!(dbg.contains("Typed"));
        assert!(dbg.contains("plugin:x"));
    }
}
