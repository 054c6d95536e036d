#![forbid(unsafe_code)]

//! # mnemo-store
//!
//! Persistent keyed blob store: a versioned local database holding named
//! collections of `string key -> raw bytes` entries.
//!
//! ## Public contract
//!
//! [`DiskStore`] is the persistent backend (redb file, native targets).
//! [`MemStore`] is the ephemeral backend with the same surface (all targets).
//! [`StoreBackend`] unifies the two behind one type.
//!
//! Every operation opens its own transaction; there is no cross-call locking.
//! Two concurrent `put` calls to the same key race at the engine level with
//! last-write-wins semantics.

mod backend;
#[cfg(not(target_arch = "wasm32"))]
mod disk;
mod error;
mod mem;
mod options;

pub use backend::StoreBackend;
#[cfg(not(target_arch = "wasm32"))]
pub use disk::DiskStore;
pub use error::{StoreError, StoreResult};
pub use mem::MemStore;
pub use options::StoreOptions;
