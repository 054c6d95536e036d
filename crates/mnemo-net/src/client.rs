use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use url::Url;

use crate::{
    error::{NetError, NetResult},
    traits::Net,
    types::{CachePreference, Headers, NetOptions},
};

/// HTTP client implementation using reqwest.
#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: Client,
    options: NetOptions,
}

impl HttpClient {
    /// Build a client with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::Http`] if the underlying client fails to build.
    pub fn new(options: NetOptions) -> NetResult<Self> {
        let inner = Client::builder()
            .use_rustls_tls()
            .pool_max_idle_per_host(options.pool_max_idle_per_host)
            .build()
            .map_err(NetError::from_reqwest)?;
        Ok(Self { inner, options })
    }

    fn build_request(
        &self,
        url: Url,
        cache: CachePreference,
        headers: Option<Headers>,
    ) -> reqwest::RequestBuilder {
        let mut request = self
            .inner
            .get(url)
            .timeout(self.options.request_timeout);

        if let Some(directive) = cache.cache_control() {
            request = request.header("Cache-Control", directive);
        }

        if let Some(headers) = headers {
            for (key, value) in headers.iter() {
                request = request.header(key, value);
            }
        }

        request
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(NetOptions::default()).expect("failed to build default HttpClient")
    }
}

#[async_trait]
impl Net for HttpClient {
    async fn get_bytes(
        &self,
        url: Url,
        cache: CachePreference,
        headers: Option<Headers>,
    ) -> Result<Bytes, NetError> {
        let request = self.build_request(url.clone(), cache, headers);

        let response = request.send().await.map_err(NetError::from)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), url = %url, body = %body, "fetch failed");
            return Err(NetError::http_status(status.as_u16(), url.to_string()));
        }

        response.bytes().await.map_err(NetError::from)
    }
}
