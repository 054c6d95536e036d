use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::{
    error::NetError,
    types::{CachePreference, Headers},
};

#[async_trait]
pub trait Net: Send + Sync {
    /// Get all bytes from a URL.
    ///
    /// `cache` expresses how intermediate HTTP caches should be treated;
    /// `headers` are sent verbatim on top of it.
    async fn get_bytes(
        &self,
        url: Url,
        cache: CachePreference,
        headers: Option<Headers>,
    ) -> Result<Bytes, NetError>;
}
