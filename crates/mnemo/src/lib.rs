#![forbid(unsafe_code)]

//! # mnemo
//!
//! Client-side helpers for model delivery: a persistent keyed blob cache, a
//! cache-or-fetch model loader, and platform utilities (async sleep, browser
//! drag/drop suppression on wasm32).
//!
//! ## Quick start
//!
//! ```ignore
//! use mnemo::prelude::*;
//!
//! let store = DiskStore::open(
//!     StoreOptions::new("models-db.redb").with_collection("onnx"),
//! )?;
//! let net = HttpClient::new(NetOptions::default())?;
//! let loader = ModelLoader::new(store.into(), net, "https://example.com".parse()?)
//!     .with_collection("onnx");
//!
//! let model = loader.fetch("resnet18").await?;
//! ```

// ── Re-export sub-crates ────────────────────────────────────────────────

pub mod net {
    pub use mnemo_net::*;
}

pub mod store {
    pub use mnemo_store::*;
}

// ── Loader and platform utilities ───────────────────────────────────────

#[cfg(target_arch = "wasm32")]
mod dom;
mod loader;
pub mod time;

#[cfg(target_arch = "wasm32")]
pub use dom::{DragDropGuard, GuardError};
pub use loader::{LoaderError, ModelLoader};
pub use time::sleep;

// ── Prelude ─────────────────────────────────────────────────────────────

pub mod prelude {
    #[cfg(target_arch = "wasm32")]
    pub use crate::DragDropGuard;
    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::store::DiskStore;
    pub use crate::{
        LoaderError, ModelLoader,
        net::{CachePreference, HttpClient, Net, NetError, NetOptions},
        sleep,
        store::{MemStore, StoreBackend, StoreError, StoreOptions},
    };
}
