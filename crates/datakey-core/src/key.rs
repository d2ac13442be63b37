//! Immutable, identity-based keys.

use std::any::{type_name, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use datakey_types::{CatalogId, CatalogType, DataQuery};

use crate::value::BaseValue;

/// Runtime description of the wrapper type a key is bound to.
///
/// The binding itself is the compile-time parameter of [`Key`]. This record
/// only exists so type-erased holders (catalogs) can compare and report it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeBinding {
    value_type_id: TypeId,
    value_type_name: &'static str,
    element_type_name: &'static str,
}

impl TypeBinding {
    pub fn of<V: BaseValue>() -> Self {
        Self {
            value_type_id: TypeId::of::<V>(),
            value_type_name: type_name::<V>(),
            element_type_name: type_name::<V::Element>(),
        }
    }

    pub fn value_type_id(&self) -> TypeId {
        self.value_type_id
    }

    pub fn value_type_name(&self) -> &'static str {
        self.value_type_name
    }

    pub fn element_type_name(&self) -> &'static str {
        self.element_type_name
    }

    pub fn is<V: BaseValue>(&self) -> bool {
        self.value_type_id == TypeId::of::<V>()
    }
}

#[derive(Debug)]
struct KeyInner {
    id: CatalogId,
    name: String,
    query: DataQuery,
    binding: TypeBinding,
}

/// A key unlocking values of wrapper type `V`.
///
/// Keys are immutable and cheap to clone: clones share the same descriptor.
/// Equality, hashing and ordering use the [`CatalogId`] only, so two keys
/// with the same id are the same key whatever their names or queries.
///
/// Keys are started with [`KeyBuilder::new`](crate::KeyBuilder::new); there is
/// no untyped `Key` to start from:
///
/// ```compile_fail
/// use datakey_core::Key;
///
/// let _ = Key::builder();
/// ```
pub struct Key<V> {
    inner: Arc<KeyInner>,
    _value: PhantomData<fn() -> V>,
}

impl<V: BaseValue> Key<V> {
    pub(crate) fn new(id: CatalogId, name: String, query: DataQuery) -> Self {
        Self {
            inner: Arc::new(KeyInner {
                id,
                name,
                query,
                binding: TypeBinding::of::<V>(),
            }),
            _value: PhantomData,
        }
    }
}

impl<V> Key<V> {
    pub fn id(&self) -> &CatalogId {
        &self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The recommended query for reading and writing this key's value.
    pub fn query(&self) -> &DataQuery {
        &self.inner.query
    }

    pub fn binding(&self) -> &TypeBinding {
        &self.inner.binding
    }

    pub fn value_type_id(&self) -> TypeId {
        self.inner.binding.value_type_id
    }

    pub fn value_type_name(&self) -> &'static str {
        self.inner.binding.value_type_name
    }

    pub fn element_type_name(&self) -> &'static str {
        self.inner.binding.element_type_name
    }

    /// Drop the static type binding, keeping it as a runtime [`TypeBinding`].
    pub fn erase(&self) -> ErasedKey {
        ErasedKey {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Clone for Key<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _value: PhantomData,
        }
    }
}

impl<V> PartialEq for Key<V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl<V> Eq for Key<V> {}

impl<V> Hash for Key<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl<V> PartialOrd for Key<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for Key<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.id.cmp(&other.inner.id)
    }
}

impl<V> fmt::Debug for Key<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("id", &self.inner.id.as_str())
            .field("name", &self.inner.name)
            .field("value_type", &self.inner.binding.value_type_name)
            .finish()
    }
}

impl<V> fmt::Display for Key<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner.id, f)
    }
}

impl<V> CatalogType for Key<V> {
    fn id(&self) -> &CatalogId {
        &self.inner.id
    }

    fn name(&self) -> &str {
        &self.inner.name
    }
}

impl<V> From<Key<V>> for ErasedKey {
    fn from(key: Key<V>) -> Self {
        ErasedKey { inner: key.inner }
    }
}

/// A [`Key`] with its wrapper type erased, for heterogeneous storage.
///
/// An erased key keeps the same identity as the key it came from and can be
/// turned back into a typed key with [`ErasedKey::downcast`].
#[derive(Clone)]
pub struct ErasedKey {
    inner: Arc<KeyInner>,
}

impl ErasedKey {
    pub fn id(&self) -> &CatalogId {
        &self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn query(&self) -> &DataQuery {
        &self.inner.query
    }

    pub fn binding(&self) -> &TypeBinding {
        &self.inner.binding
    }

    /// Recover the typed key. Returns `None` if `V` is not the wrapper type
    /// the key was built with.
    pub fn downcast<V: BaseValue>(&self) -> Option<Key<V>> {
        if !self.inner.binding.is::<V>() {
            return None;
        }
        Some(Key {
            inner: Arc::clone(&self.inner),
            _value: PhantomData,
        })
    }
}

impl PartialEq for ErasedKey {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for ErasedKey {}

impl Hash for ErasedKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Debug for ErasedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedKey")
            .field("id", &self.inner.id.as_str())
            .field("name", &self.inner.name)
            .field("value_type", &self.inner.binding.value_type_name)
            .finish()
    }
}

impl fmt::Display for ErasedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner.id, f)
    }
}

impl CatalogType for ErasedKey {
    fn id(&self) -> &CatalogId {
        &self.inner.id
    }

    fn name(&self) -> &str {
        &self.inner.name
    }
}
