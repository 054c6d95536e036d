//! Cache-or-fetch loader for named binary models.

use bytes::Bytes;
use mnemo_net::{CachePreference, HttpClient, Net, NetError};
use mnemo_store::{StoreBackend, StoreError};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

const DEFAULT_COLLECTION: &str = "models";

/// Errors surfaced by [`ModelLoader::fetch`].
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("fetch error: {0}")]
    Net(#[from] NetError),
    #[error("invalid model URL: {0}")]
    Url(String),
}

/// Loads named models through the blob cache, fetching on miss.
///
/// Store and transport are explicit collaborators; the loader never reaches
/// into ambient globals. Steps within one [`fetch`](Self::fetch) call run
/// strictly in sequence (lookup, fetch, populate). Across calls there is no
/// ordering and no mutual exclusion: concurrent fetches of the same model
/// may both miss and both write, last write wins.
#[derive(Clone, Debug)]
pub struct ModelLoader<N = HttpClient> {
    store: StoreBackend,
    net: N,
    base_url: Url,
    collection: String,
}

impl<N: Net> ModelLoader<N> {
    /// Create a loader resolving models against `base_url`.
    ///
    /// Models are addressed as `<base_url>/models/<name>.onnx`.
    pub fn new(store: StoreBackend, net: N, base_url: Url) -> Self {
        Self {
            store,
            net,
            base_url,
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    /// Set the collection used for cache lookups and populates.
    pub fn with_collection<S: Into<String>>(mut self, collection: S) -> Self {
        self.collection = collection.into();
        self
    }

    fn model_url(&self, model_name: &str) -> Result<Url, LoaderError> {
        self.base_url
            .join(&format!("/models/{model_name}.onnx"))
            .map_err(|e| LoaderError::Url(e.to_string()))
    }

    /// Return the bytes of `model_name`, from cache when possible.
    ///
    /// On a cache miss the model is fetched over HTTP (preferring any cached
    /// HTTP response over revalidation) and the cache is populated with the
    /// result. A failed populate is logged and does not fail the call: the
    /// fetched bytes are returned regardless.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Store`] when the cache lookup itself fails and
    /// [`LoaderError::Net`] when the network retrieval fails or returns a
    /// non-success status. No retry is attempted.
    pub async fn fetch(&self, model_name: &str) -> Result<Bytes, LoaderError> {
        if let Some(blob) = self.store.get(&self.collection, model_name)? {
            debug!(model = model_name, len = blob.len(), "model cache hit");
            return Ok(blob);
        }

        let url = self.model_url(model_name)?;
        debug!(model = model_name, url = %url, "model cache miss, fetching");

        let blob = self
            .net
            .get_bytes(url, CachePreference::Reuse, None)
            .await?;

        // The cache is an optimization; a failed populate must not turn a
        // successful fetch into an error.
        if let Err(e) = self.store.put(&self.collection, model_name, &blob) {
            warn!(model = model_name, error = %e, "failed to populate model cache");
        }

        Ok(blob)
    }

    /// The collection this loader reads and populates.
    pub fn collection(&self) -> &str {
        &self.collection
    }
}
