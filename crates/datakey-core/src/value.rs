//! Value wrappers: an optional stored value plus a mandatory default.

use crate::key::Key;

/// A read-only view over a value that may or may not be set.
///
/// Every wrapper carries a default that is always available, and optionally a
/// stored value. [`BaseValue::get`] falls back to the default when nothing is
/// stored; [`BaseValue::get_direct`] reports the stored value exactly, so
/// callers can tell "not set" apart from "set to the default".
///
/// Implementors provide [`get_default`](BaseValue::get_default),
/// [`get_direct`](BaseValue::get_direct) and [`key`](BaseValue::key); the
/// other accessors derive from them.
pub trait BaseValue: Sized + 'static {
    /// The type of element this wrapper holds.
    type Element: 'static;

    /// The default element. Always present.
    fn get_default(&self) -> &Self::Element;

    /// The stored element, or `None` if no value was set.
    fn get_direct(&self) -> Option<&Self::Element>;

    /// The key this wrapper answers.
    fn key(&self) -> &Key<Self>;

    /// The stored element, or the default if none was set.
    fn get(&self) -> &Self::Element {
        self.get_direct().unwrap_or_else(|| self.get_default())
    }

    /// Whether a value was actually set.
    fn exists(&self) -> bool {
        self.get_direct().is_some()
    }
}

/// The stock single-element wrapper.
///
/// `Value` is an immutable snapshot: [`Value::with`] and [`Value::without`]
/// return new wrappers and leave the receiver untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Value<E: 'static> {
    key: Key<Value<E>>,
    default: E,
    stored: Option<E>,
}

impl<E: 'static> Value<E> {
    /// A wrapper with no stored value.
    pub fn new(key: Key<Value<E>>, default: E) -> Self {
        Self::from_parts(key, default, None)
    }

    /// A wrapper holding `value`.
    pub fn with_value(key: Key<Value<E>>, default: E, value: E) -> Self {
        Self::from_parts(key, default, Some(value))
    }

    pub fn from_parts(key: Key<Value<E>>, default: E, stored: Option<E>) -> Self {
        Self {
            key,
            default,
            stored,
        }
    }

    /// Consume the wrapper, returning the stored element or the default.
    pub fn into_inner(self) -> E {
        self.stored.unwrap_or(self.default)
    }
}

impl<E: Clone + 'static> Value<E> {
    /// A new snapshot holding `value`, with the same key and default.
    pub fn with(&self, value: E) -> Self {
        Self {
            key: self.key.clone(),
            default: self.default.clone(),
            stored: Some(value),
        }
    }

    /// A new snapshot with no stored value.
    pub fn without(&self) -> Self {
        Self {
            key: self.key.clone(),
            default: self.default.clone(),
            stored: None,
        }
    }
}

impl<E: 'static> BaseValue for Value<E> {
    type Element = E;

    fn get_default(&self) -> &E {
        &self.default
    }

    fn get_direct(&self) -> Option<&E> {
        self.stored.as_ref()
    }

    fn key(&self) -> &Key<Self> {
        &self.key
    }
}

/// A wrapper over a list of elements. The default is the empty list unless
/// one is given.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<E: 'static> {
    key: Key<ListValue<E>>,
    default: Vec<E>,
    stored: Option<Vec<E>>,
}

impl<E: 'static> ListValue<E> {
    /// An unset list with an empty default.
    pub fn new(key: Key<ListValue<E>>) -> Self {
        Self::with_default(key, Vec::new())
    }

    /// An unset list with the given default.
    pub fn with_default(key: Key<ListValue<E>>, default: Vec<E>) -> Self {
        Self {
            key,
            default,
            stored: None,
        }
    }

    /// A list holding `elements`, with an empty default.
    pub fn with_elements(key: Key<ListValue<E>>, elements: Vec<E>) -> Self {
        Self {
            key,
            default: Vec::new(),
            stored: Some(elements),
        }
    }

    pub fn len(&self) -> usize {
        self.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.get().is_empty()
    }

    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.get().contains(element)
    }
}

impl<E: Clone + 'static> ListValue<E> {
    /// A new snapshot with `element` appended to the current list.
    pub fn with_element(&self, element: E) -> Self {
        let mut elements = self.get().clone();
        elements.push(element);
        Self {
            key: self.key.clone(),
            default: self.default.clone(),
            stored: Some(elements),
        }
    }
}

impl<E: 'static> BaseValue for ListValue<E> {
    type Element = Vec<E>;

    fn get_default(&self) -> &Vec<E> {
        &self.default
    }

    fn get_direct(&self) -> Option<&Vec<E>> {
        self.stored.as_ref()
    }

    fn key(&self) -> &Key<Self> {
        &self.key
    }
}
