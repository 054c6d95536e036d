#![forbid(unsafe_code)]

//! Storage backend: persistent or in-memory store.

use bytes::Bytes;

use crate::{error::StoreResult, mem::MemStore};

#[cfg(not(target_arch = "wasm32"))]
use crate::disk::DiskStore;

/// Storage backend: persistent or in-memory store.
///
/// Provides a unified interface over [`DiskStore`] (redb file) and
/// [`MemStore`] (ephemeral). Both variants expose the same operations and
/// the same error surface.
#[derive(Clone, Debug)]
pub enum StoreBackend {
    /// File-backed persistent storage (native targets).
    #[cfg(not(target_arch = "wasm32"))]
    Disk(DiskStore),
    /// In-memory storage (no persistence, no disk artifacts).
    Mem(MemStore),
}

impl StoreBackend {
    /// Read the blob stored under `key` in `collection`.
    pub fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Bytes>> {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Disk(store) => store.get(collection, key),
            Self::Mem(store) => store.get(collection, key),
        }
    }

    /// Store `blob` under `key` in `collection`, overwriting silently.
    pub fn put(&self, collection: &str, key: &str, blob: &[u8]) -> StoreResult<()> {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Disk(store) => store.put(collection, key, blob),
            Self::Mem(store) => store.put(collection, key, blob),
        }
    }

    /// Remove the entry for `key`, reporting whether it existed.
    pub fn delete(&self, collection: &str, key: &str) -> StoreResult<bool> {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Disk(store) => store.delete(collection, key),
            Self::Mem(store) => store.delete(collection, key),
        }
    }

    /// Whether an entry exists for `key`.
    pub fn contains(&self, collection: &str, key: &str) -> StoreResult<bool> {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Disk(store) => store.contains(collection, key),
            Self::Mem(store) => store.contains(collection, key),
        }
    }

    /// Whether this backend is ephemeral (in-memory).
    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Self::Mem(_))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<DiskStore> for StoreBackend {
    fn from(store: DiskStore) -> Self {
        Self::Disk(store)
    }
}

impl From<MemStore> for StoreBackend {
    fn from(store: MemStore) -> Self {
        Self::Mem(store)
    }
}
