#![forbid(unsafe_code)]

use std::path::PathBuf;

use crate::error::{StoreError, StoreResult};

/// Options for opening a [`DiskStore`](crate::DiskStore).
///
/// The schema version is a positive integer chosen by the caller. Opening a
/// database whose on-disk version is newer than the requested one fails;
/// opening with a newer version runs a one-time upgrade step.
#[derive(Clone, Debug)]
pub struct StoreOptions {
    /// Path of the database file (parent directories are created).
    pub db_path: PathBuf,
    /// Requested schema version. Must be positive.
    pub schema_version: u32,
    /// Collection guaranteed to exist after a successful open.
    pub collection: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join("mnemo").join("store.redb"),
            schema_version: 1,
            collection: "models".to_string(),
        }
    }
}

impl StoreOptions {
    /// Create options with the given database path and defaults elsewhere.
    pub fn new<P: Into<PathBuf>>(db_path: P) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    /// Set the requested schema version.
    pub fn with_schema_version(mut self, version: u32) -> Self {
        self.schema_version = version;
        self
    }

    /// Set the collection created on open.
    pub fn with_collection<S: Into<String>>(mut self, collection: S) -> Self {
        self.collection = collection.into();
        self
    }

    pub(crate) fn validate(&self) -> StoreResult<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(StoreError::Open("database path must not be empty".into()));
        }
        if self.schema_version == 0 {
            return Err(StoreError::Open("schema version must be positive".into()));
        }
        if self.collection.is_empty() {
            return Err(StoreError::Open("collection name must not be empty".into()));
        }
        Ok(())
    }
}
