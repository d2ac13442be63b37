//! The [`CatalogType`] trait for catalog-addressable descriptors.

use crate::ids::CatalogId;

/// A descriptor that can be stored in, and looked up from, a catalog.
///
/// Identity is the [`CatalogId`] alone: two catalog types with the same id
/// are the same entry, whatever their display names say.
pub trait CatalogType {
    /// The durable identity of this entry.
    fn id(&self) -> &CatalogId;

    /// Human-readable display name. Not required to be unique.
    fn name(&self) -> &str;

    /// The namespace (plugin id) that declared this entry.
    fn namespace(&self) -> &str {
        self.id().namespace()
    }
}
