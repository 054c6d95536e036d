#![forbid(unsafe_code)]

//! redb-backed persistent store.

use std::sync::Arc;

use bytes::Bytes;
use redb::{Database, ReadableTable, TableDefinition};
use tracing::info;

use crate::{
    error::{StoreError, StoreResult},
    options::StoreOptions,
};

// Reserved table holding store bookkeeping. Collections may not use this name.
const META_TABLE_NAME: &str = "__mnemo_meta";
const META: TableDefinition<&str, u32> = TableDefinition::new(META_TABLE_NAME);
const SCHEMA_VERSION_KEY: &str = "schema_version";

fn blob_table(collection: &str) -> TableDefinition<'_, &'static str, &'static [u8]> {
    TableDefinition::new(collection)
}

/// Handle to an open, versioned database of keyed blob collections.
///
/// Cheap to clone; all clones share one underlying database. The database
/// file stays locked for the lifetime of the handle and is released on drop
/// (there is no explicit close).
#[derive(Clone)]
pub struct DiskStore {
    db: Arc<Database>,
    options: StoreOptions,
}

impl std::fmt::Debug for DiskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskStore")
            .field("db_path", &self.options.db_path)
            .field("schema_version", &self.options.schema_version)
            .finish_non_exhaustive()
    }
}

impl DiskStore {
    /// Open (creating if necessary) the database described by `options`.
    ///
    /// If the on-disk schema version is older than the requested one, or the
    /// database is fresh, a one-time upgrade step runs which records the
    /// requested version and creates the named collection if absent. Opening
    /// twice with identical options is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] when the options are invalid, the engine
    /// rejects the open (locked file, corrupt database, I/O failure), or the
    /// on-disk version is newer than the requested one. No retry is attempted.
    pub fn open(options: StoreOptions) -> StoreResult<Self> {
        options.validate()?;
        if options.collection == META_TABLE_NAME {
            return Err(StoreError::Open(format!(
                "collection name {META_TABLE_NAME:?} is reserved"
            )));
        }

        if let Some(parent) = options.db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(StoreError::open)?;
        }

        let db = Database::create(&options.db_path).map_err(StoreError::open)?;
        Self::migrate(&db, &options)?;

        info!(path = %options.db_path.display(), version = options.schema_version, "opened store");

        Ok(Self {
            db: Arc::new(db),
            options,
        })
    }

    fn migrate(db: &Database, options: &StoreOptions) -> StoreResult<()> {
        let txn = db.begin_write().map_err(StoreError::open)?;
        {
            let mut meta = txn.open_table(META).map_err(StoreError::open)?;
            let stored = meta
                .get(SCHEMA_VERSION_KEY)
                .map_err(StoreError::open)?
                .map(|guard| guard.value());

            match stored {
                Some(stored) if stored > options.schema_version => {
                    return Err(StoreError::Open(format!(
                        "requested schema version {} is older than on-disk version {stored}",
                        options.schema_version
                    )));
                }
                Some(stored) if stored < options.schema_version => {
                    meta.insert(SCHEMA_VERSION_KEY, options.schema_version)
                        .map_err(StoreError::open)?;
                    info!(from = stored, to = options.schema_version, "upgrading store schema");
                }
                Some(_) => {}
                None => {
                    meta.insert(SCHEMA_VERSION_KEY, options.schema_version)
                        .map_err(StoreError::open)?;
                    info!(version = options.schema_version, "initializing store schema");
                }
            }

            // Opening a table in a write transaction creates it if absent.
            txn.open_table(blob_table(&options.collection))
                .map_err(StoreError::open)?;
        }
        txn.commit().map_err(StoreError::open)?;
        Ok(())
    }

    /// Read the blob stored under `key` in `collection`.
    ///
    /// Runs in its own read-only transaction. Returns `Ok(None)` when no
    /// entry exists for the key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] on engine-level transaction failure,
    /// including a collection that was never created. The read is not retried.
    pub fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Bytes>> {
        let txn = self.db.begin_read().map_err(StoreError::read)?;
        let table = txn
            .open_table(blob_table(collection))
            .map_err(StoreError::read)?;
        let value = table
            .get(key)
            .map_err(StoreError::read)?
            .map(|guard| Bytes::copy_from_slice(guard.value()));
        Ok(value)
    }

    /// Store `blob` under `key` in `collection`, overwriting any existing
    /// entry silently.
    ///
    /// Runs in its own read-write transaction; atomicity is the transaction's
    /// own. Concurrent puts to the same key are last-write-wins.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] on engine-level transaction failure.
    /// No retry, no rollback beyond the aborted transaction.
    pub fn put(&self, collection: &str, key: &str, blob: &[u8]) -> StoreResult<()> {
        let txn = self.db.begin_write().map_err(StoreError::write)?;
        {
            let mut table = txn
                .open_table(blob_table(collection))
                .map_err(StoreError::write)?;
            table.insert(key, blob).map_err(StoreError::write)?;
        }
        txn.commit().map_err(StoreError::write)?;
        Ok(())
    }

    /// Remove the entry for `key`, reporting whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] on engine-level transaction failure.
    pub fn delete(&self, collection: &str, key: &str) -> StoreResult<bool> {
        let txn = self.db.begin_write().map_err(StoreError::write)?;
        let removed = {
            let mut table = txn
                .open_table(blob_table(collection))
                .map_err(StoreError::write)?;
            table.remove(key).map_err(StoreError::write)?.is_some()
        };
        txn.commit().map_err(StoreError::write)?;
        Ok(removed)
    }

    /// Whether an entry exists for `key` without copying the blob out.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] on engine-level transaction failure.
    pub fn contains(&self, collection: &str, key: &str) -> StoreResult<bool> {
        let txn = self.db.begin_read().map_err(StoreError::read)?;
        let table = txn
            .open_table(blob_table(collection))
            .map_err(StoreError::read)?;
        Ok(table.get(key).map_err(StoreError::read)?.is_some())
    }

    /// The schema version this handle was opened with.
    pub fn schema_version(&self) -> u32 {
        self.options.schema_version
    }

    /// Options used to open this store.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }
}
