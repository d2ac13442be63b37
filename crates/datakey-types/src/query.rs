//! Structured paths into serialized documents.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};

/// Default separator used by [`DataQuery::parse`] and [`fmt::Display`].
pub const DEFAULT_SEPARATOR: char = '.';

/// A hierarchical locator for a value inside a serialized document.
///
/// A query is an ordered list of non-empty parts. The empty query addresses
/// the document root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct DataQuery {
    parts: Vec<String>,
}

impl DataQuery {
    /// The empty query (document root).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Split `path` on `separator`. Empty segments are dropped, so
    /// `"a..b"` and `".a.b."` both yield `[a, b]`.
    pub fn of(separator: char, path: &str) -> Self {
        Self {
            parts: path
                .split(separator)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Split `path` on `.`.
    pub fn parse(path: &str) -> Self {
        Self::of(DEFAULT_SEPARATOR, path)
    }

    /// Build a query from explicit parts. Every part must be non-empty.
    pub fn of_parts<I, S>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts: Vec<String> = parts.into_iter().map(Into::into).collect();
        if let Some(idx) = parts.iter().position(String::is_empty) {
            return Err(TypeError::InvalidQuery(format!("part {idx} is empty")));
        }
        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Append another query to this one.
    pub fn then(&self, other: &DataQuery) -> Self {
        let mut parts = self.parts.clone();
        parts.extend(other.parts.iter().cloned());
        Self { parts }
    }

    /// Append a single part, which must be non-empty.
    pub fn then_part(&self, part: impl Into<String>) -> Result<Self> {
        let part = part.into();
        if part.is_empty() {
            return Err(TypeError::InvalidQuery("appended part is empty".into()));
        }
        let mut parts = self.parts.clone();
        parts.push(part);
        Ok(Self { parts })
    }

    /// The query without its last part. The root is its own parent.
    pub fn parent(&self) -> Self {
        let mut parts = self.parts.clone();
        parts.pop();
        Self { parts }
    }

    /// The last part, if any.
    pub fn last(&self) -> Option<&str> {
        self.parts.last().map(String::as_str)
    }

    /// Join the parts with `separator`.
    pub fn as_path(&self, separator: char) -> String {
        let mut out = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_str(part);
        }
        out
    }
}

impl TryFrom<Vec<String>> for DataQuery {
    type Error = TypeError;

    fn try_from(parts: Vec<String>) -> Result<Self> {
        Self::of_parts(parts)
    }
}

impl From<DataQuery> for Vec<String> {
    fn from(query: DataQuery) -> Self {
        query.parts
    }
}

impl fmt::Display for DataQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_path(DEFAULT_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dotted_path() {
        let q = DataQuery::parse("data.example");
        assert_eq!(q.parts(), &["data".to_string(), "example".to_string()]);
        assert_eq!(q.len(), 2);
        assert_eq!(q.to_string(), "data.example");
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(DataQuery::parse("a..b"), DataQuery::parse(".a.b."));
        assert!(DataQuery::parse("").is_empty());
    }

    #[test]
    fn custom_separator() {
        let q = DataQuery::of('/', "display/name");
        assert_eq!(q.as_path('.'), "display.name");
        assert_eq!(q.as_path('/'), "display/name");
    }

    #[test]
    fn of_parts_rejects_empty_part() {
        assert!(DataQuery::of_parts(["a", "", "c"]).is_err());
        assert_eq!(
            DataQuery::of_parts(["a", "b"]).unwrap(),
            DataQuery::parse("a.b")
        );
    }

    #[test]
    fn then_and_parent() {
        let base = DataQuery::parse("data");
        let full = base.then(&DataQuery::parse("example.value"));
        assert_eq!(full.to_string(), "data.example.value");
        assert_eq!(full.parent().to_string(), "data.example");
        assert_eq!(full.last(), Some("value"));
        assert_eq!(DataQuery::empty().parent(), DataQuery::empty());
        assert_eq!(DataQuery::empty().last(), None);
    }

    #[test]
    fn then_part_rejects_empty() {
        let q = DataQuery::parse("data");
        assert!(q.then_part("").is_err());
        assert_eq!(q.then_part("x").unwrap().to_string(), "data.x");
    }

    #[test]
    fn serializes_as_list() {
        let q = DataQuery::parse("data.example");
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"["data","example"]"#);
        let back: DataQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn deserialize_rejects_empty_part() {
        let parsed: std::result::Result<DataQuery, _> = serde_json::from_str(r#"["data",""]"#);
        assert!(parsed.is_err());
    }
}
