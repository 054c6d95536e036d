use std::{collections::HashMap, time::Duration};

#[derive(Clone, Debug, PartialEq)]
pub struct Headers {
    inner: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for Headers {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, String>> for Headers {
    fn from(map: HashMap<String, String>) -> Self {
        Self { inner: map }
    }
}

/// How the transport should treat already-cached HTTP responses.
///
/// [`CachePreference::Reuse`] asks caches along the path to serve any stored
/// response, however stale, instead of revalidating. Expressed as a
/// `Cache-Control: max-stale` request directive; a transport with no cache in
/// the path ignores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CachePreference {
    /// Normal freshness rules apply.
    #[default]
    Validate,
    /// Prefer any stored response over a fresh network round trip.
    Reuse,
}

impl CachePreference {
    /// Request `Cache-Control` directive for this preference, if any.
    pub fn cache_control(self) -> Option<&'static str> {
        match self {
            Self::Validate => None,
            Self::Reuse => Some("max-stale"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NetOptions {
    pub request_timeout: Duration,
    /// Max idle connections per host. Set to 0 to disable pooling and reduce memory.
    pub pool_max_idle_per_host: usize,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 0,
        }
    }
}
