//! In-memory key catalog.
//!
//! [`InMemoryKeyCatalog`] stores keys in a `BTreeMap` protected by a
//! `RwLock`. It implements the full [`KeyCatalog`] trait and is what a
//! process-wide registry of keys looks like when nothing needs persisting.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use datakey_core::ErasedKey;
use datakey_types::CatalogId;
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::traits::KeyCatalog;

/// Keys and the sealed flag share one lock, so a registration either lands
/// before `seal()` returns or is refused.
#[derive(Debug, Default)]
struct CatalogState {
    keys: BTreeMap<CatalogId, ErasedKey>,
    sealed: bool,
}

/// An in-memory implementation of [`KeyCatalog`].
#[derive(Debug)]
pub struct InMemoryKeyCatalog {
    config: CatalogConfig,
    state: RwLock<CatalogState>,
}

impl InMemoryKeyCatalog {
    /// Create an empty catalog with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            state: RwLock::new(CatalogState::default()),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CatalogState>> {
        self.state
            .read()
            .map_err(|e| CatalogError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CatalogState>> {
        self.state
            .write()
            .map_err(|e| CatalogError::LockPoisoned(e.to_string()))
    }
}

impl Default for InMemoryKeyCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyCatalog for InMemoryKeyCatalog {
    fn register(&self, key: ErasedKey) -> Result<()> {
        let id = key.id().clone();
        let mut state = self.write()?;

        if state.sealed {
            return Err(CatalogError::Sealed { id: id.to_string() });
        }

        if !self.config.allows(id.namespace()) {
            return Err(CatalogError::NamespaceNotAllowed {
                id: id.to_string(),
                namespace: id.namespace().to_string(),
            });
        }

        if state.keys.contains_key(&id) {
            warn!(id = %id, "rejected duplicate key registration");
            return Err(CatalogError::DuplicateKey { id: id.to_string() });
        }

        if state.keys.len() >= self.config.max_keys {
            return Err(CatalogError::CapacityExceeded {
                max: self.config.max_keys,
            });
        }

        debug!(
            id = %id,
            value_type = key.binding().value_type_name(),
            "registered key"
        );
        state.keys.insert(id, key);
        Ok(())
    }

    fn lookup(&self, id: &CatalogId) -> Result<Option<ErasedKey>> {
        Ok(self.read()?.keys.get(id).cloned())
    }

    fn ids(&self, namespace: Option<&str>) -> Result<Vec<CatalogId>> {
        Ok(self
            .read()?
            .keys
            .keys()
            .filter(|id| namespace.map_or(true, |ns| id.namespace() == ns))
            .cloned()
            .collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.read()?.keys.len())
    }

    fn seal(&self) -> Result<()> {
        let mut state = self.write()?;
        if !state.sealed {
            state.sealed = true;
            debug!(keys = state.keys.len(), "sealed key catalog");
        }
        Ok(())
    }

    fn is_sealed(&self) -> Result<bool> {
        Ok(self.read()?.sealed)
    }
}
