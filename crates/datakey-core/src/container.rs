//! The [`ValueContainer`] contract for holders that answer keys.

use crate::key::Key;
use crate::value::BaseValue;

/// A holder that can produce the value wrapper for a key.
///
/// Storage is up to the implementor. Callers only rely on the wrapper
/// contract of [`BaseValue`] once they have one.
pub trait ValueContainer {
    /// Whether this holder knows about `key` at all.
    fn supports<V: BaseValue>(&self, key: &Key<V>) -> bool;

    /// The wrapper for `key`, or `None` if the key is not supported.
    fn get_value<V: BaseValue>(&self, key: &Key<V>) -> Option<V>;

    /// The element for `key`, falling back to the wrapper's default.
    fn get<V>(&self, key: &Key<V>) -> Option<V::Element>
    where
        V: BaseValue,
        V::Element: Clone,
    {
        self.get_value(key).map(|value| value.get().clone())
    }

    /// The element for `key` only if a value was actually set.
    fn get_direct<V>(&self, key: &Key<V>) -> Option<V::Element>
    where
        V: BaseValue,
        V::Element: Clone,
    {
        self.get_value(key)
            .and_then(|value| value.get_direct().cloned())
    }

    /// The element for `key`, or `default` when the key is not supported.
    ///
    /// A supported key never reaches `default`: an unset value still answers
    /// with the wrapper's own default.
    fn get_or_default<V>(&self, key: &Key<V>, default: V::Element) -> V::Element
    where
        V: BaseValue,
        V::Element: Clone,
    {
        self.get(key).unwrap_or(default)
    }
}
