//! Catalog identifier validation.
//!
//! A catalog id has the form `namespace:value`:
//! - The namespace is a plugin id: a lowercase ASCII letter followed by 1 to
//!   63 characters from `[a-z0-9_-]`
//! - The value is 1 to 128 characters from `[a-z0-9_./-]`
//! - The value must not start or end with `.` or `/`
//! - The value must not contain `..` or `//`
//! - Exactly one `:` separates the two parts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};

/// Maximum length of a namespace (plugin id).
pub const MAX_NAMESPACE_LEN: usize = 64;

/// Maximum length of the value part of a catalog id.
pub const MAX_VALUE_LEN: usize = 128;

/// Separator between namespace and value.
pub const SEPARATOR: char = ':';

/// Validate a namespace, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use datakey_types::validate_namespace;
///
/// assert!(validate_namespace("sponge").is_ok());
/// assert!(validate_namespace("my_plugin-2").is_ok());
/// assert!(validate_namespace("a").is_err());
/// assert!(validate_namespace("2fast").is_err());
/// assert!(validate_namespace("Upper").is_err());
/// ```
pub fn validate_namespace(namespace: &str) -> Result<()> {
    let invalid = |reason: String| TypeError::InvalidNamespace {
        namespace: namespace.to_string(),
        reason,
    };

    let mut chars = namespace.chars();
    match chars.next() {
        None => return Err(invalid("namespace must not be empty".into())),
        Some(first) if !first.is_ascii_lowercase() => {
            return Err(invalid(format!(
                "must start with a lowercase letter, found {first:?}"
            )));
        }
        Some(_) => {}
    }

    let len = namespace.chars().count();
    if len < 2 {
        return Err(invalid("must be at least 2 characters".into()));
    }
    if len > MAX_NAMESPACE_LEN {
        return Err(invalid(format!(
            "must be at most {MAX_NAMESPACE_LEN} characters, got {len}"
        )));
    }

    if let Some(ch) = chars.find(|c| !is_namespace_char(*c)) {
        return Err(invalid(format!("contains forbidden character: {ch:?}")));
    }

    Ok(())
}

/// Validate a plugin id. Plugin ids double as catalog namespaces.
pub fn validate_plugin_id(id: &str) -> Result<()> {
    validate_namespace(id)
}

/// Validate a full `namespace:value` catalog id.
///
/// # Examples
///
/// ```
/// use datakey_types::validate_catalog_id;
///
/// assert!(validate_catalog_id("plugin:example_key").is_ok());
/// assert!(validate_catalog_id("sponge:display/name").is_ok());
/// assert!(validate_catalog_id("example_key").is_err());
/// assert!(validate_catalog_id("plugin:Bad").is_err());
/// assert!(validate_catalog_id("a:b:c").is_err());
/// ```
pub fn validate_catalog_id(id: &str) -> Result<()> {
    let (namespace, value) = split_id(id)?;
    validate_namespace(namespace).map_err(|e| TypeError::InvalidId {
        id: id.to_string(),
        reason: e.to_string(),
    })?;
    validate_value(id, value)
}

fn split_id(id: &str) -> Result<(&str, &str)> {
    let invalid = |reason: &str| TypeError::InvalidId {
        id: id.to_string(),
        reason: reason.to_string(),
    };
    let (namespace, value) = id
        .split_once(SEPARATOR)
        .ok_or_else(|| invalid("missing ':' between namespace and value"))?;
    if value.contains(SEPARATOR) {
        return Err(invalid("must contain exactly one ':'"));
    }
    Ok((namespace, value))
}

fn validate_value(id: &str, value: &str) -> Result<()> {
    let invalid = |reason: String| TypeError::InvalidId {
        id: id.to_string(),
        reason,
    };

    if value.is_empty() {
        return Err(invalid("value must not be empty".into()));
    }

    let len = value.chars().count();
    if len > MAX_VALUE_LEN {
        return Err(invalid(format!(
            "value must be at most {MAX_VALUE_LEN} characters, got {len}"
        )));
    }

    if let Some(ch) = value.chars().find(|c| !is_value_char(*c)) {
        return Err(invalid(format!("contains forbidden character: {ch:?}")));
    }

    if value.starts_with(['.', '/']) || value.ends_with(['.', '/']) {
        return Err(invalid("value must not start or end with '.' or '/'".into()));
    }

    if value.contains("..") {
        return Err(invalid("must not contain '..'".into()));
    }

    if value.contains("//") {
        return Err(invalid("must not contain consecutive slashes '//'".into()));
    }

    Ok(())
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
}

fn is_value_char(c: char) -> bool {
    is_namespace_char(c) || c == '.' || c == '/'
}

/// A validated `namespace:value` identifier.
///
/// `CatalogId` is the durable identity of anything stored in a catalog.
/// Construction always validates, so holding a `CatalogId` proves the id is
/// well formed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CatalogId {
    raw: String,
    split: usize,
}

impl CatalogId {
    /// Parse and validate a full `namespace:value` id.
    pub fn parse(id: impl Into<String>) -> Result<Self> {
        let raw = id.into();
        validate_catalog_id(&raw)?;
        let split = raw.find(SEPARATOR).ok_or_else(|| TypeError::InvalidId {
            id: raw.clone(),
            reason: "missing ':' between namespace and value".into(),
        })?;
        Ok(Self { raw, split })
    }

    /// Build an id from its two parts.
    pub fn new(namespace: &str, value: &str) -> Result<Self> {
        Self::parse(format!("{namespace}{SEPARATOR}{value}"))
    }

    /// The namespace (plugin id) part.
    pub fn namespace(&self) -> &str {
        &self.raw[..self.split]
    }

    /// The part after the `:`.
    pub fn value(&self) -> &str {
        &self.raw[self.split + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Debug for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CatalogId({})", self.raw)
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for CatalogId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CatalogId {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<CatalogId> for String {
    fn from(id: CatalogId) -> Self {
        id.raw
    }
}

impl AsRef<str> for CatalogId {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
