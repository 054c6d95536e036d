#![forbid(unsafe_code)]

//! In-memory store for ephemeral (non-persisted) use.

use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;

use crate::error::StoreResult;

/// In-memory keyed blob store with the same surface as
/// [`DiskStore`](crate::DiskStore).
///
/// Collections are created lazily on first `put`; reading an unknown
/// collection yields an absent result instead of an error. Nothing is
/// persisted, and there is no schema version bookkeeping. Intended for tests
/// and for targets without a filesystem (wasm32).
#[derive(Clone, Debug, Default)]
pub struct MemStore {
    collections: Arc<DashMap<String, DashMap<String, Bytes>>>,
}

impl MemStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the blob stored under `key` in `collection`.
    pub fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Bytes>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|entries| entries.get(key).map(|blob| blob.value().clone())))
    }

    /// Store `blob` under `key` in `collection`, overwriting silently.
    pub fn put(&self, collection: &str, key: &str, blob: &[u8]) -> StoreResult<()> {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), Bytes::copy_from_slice(blob));
        Ok(())
    }

    /// Remove the entry for `key`, reporting whether it existed.
    pub fn delete(&self, collection: &str, key: &str) -> StoreResult<bool> {
        Ok(self
            .collections
            .get(collection)
            .is_some_and(|entries| entries.remove(key).is_some()))
    }

    /// Whether an entry exists for `key`.
    pub fn contains(&self, collection: &str, key: &str) -> StoreResult<bool> {
        Ok(self
            .collections
            .get(collection)
            .is_some_and(|entries| entries.contains_key(key)))
    }
}
