//! The [`KeyCatalog`] trait defining the key registry interface.

use datakey_core::{BaseValue, ErasedKey, Key};
use datakey_types::CatalogId;

use crate::error::{CatalogError, Result};

/// Registry of keys, indexed by id.
///
/// Implementations must be thread-safe (`Send + Sync`). Registration is
/// append-only: a key id is declared once and a second key with the same id
/// is rejected with [`CatalogError::DuplicateKey`].
pub trait KeyCatalog: Send + Sync {
    /// Register a key.
    fn register(&self, key: ErasedKey) -> Result<()>;

    /// Look up a key by id.
    ///
    /// Returns `Ok(None)` if no key is registered under `id`.
    fn lookup(&self, id: &CatalogId) -> Result<Option<ErasedKey>>;

    /// All registered ids in ascending order, optionally restricted to one
    /// namespace.
    fn ids(&self, namespace: Option<&str>) -> Result<Vec<CatalogId>>;

    /// Number of registered keys.
    fn len(&self) -> Result<usize>;

    /// Refuse every registration from now on. No key may land after this
    /// returns, so `len()` read afterwards is final.
    fn seal(&self) -> Result<()>;

    fn is_sealed(&self) -> Result<bool>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn contains(&self, id: &CatalogId) -> Result<bool> {
        Ok(self.lookup(id)?.is_some())
    }

    /// Register a typed key.
    fn register_key<V: BaseValue>(&self, key: &Key<V>) -> Result<()>
    where
        Self: Sized,
    {
        self.register(key.erase())
    }

    /// Look up a key by id and recover its static type.
    ///
    /// Returns [`CatalogError::TypeMismatch`] if the key registered under
    /// `id` is bound to another wrapper type.
    fn get<V: BaseValue>(&self, id: &CatalogId) -> Result<Option<Key<V>>>
    where
        Self: Sized,
    {
        let Some(erased) = self.lookup(id)? else {
            return Ok(None);
        };
        match erased.downcast::<V>() {
            Some(key) => Ok(Some(key)),
            None => Err(CatalogError::TypeMismatch {
                id: id.to_string(),
                expected: std::any::type_name::<V>(),
                actual: erased.binding().value_type_name(),
            }),
        }
    }
}
