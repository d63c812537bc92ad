//! Default and per-call request configuration

use std::collections::BTreeMap;
use std::time::Duration;

/// Timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Baseline request settings applied to every call unless overridden
///
/// Created once when the client is built and never mutated afterwards.
/// Per-call options are overlaid with [`ClientConfig::merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base endpoint URL, stored without a trailing slash
    pub base_url: String,
    /// Total request timeout enforced by the transport
    pub timeout: Duration,
    /// Headers sent with every request
    pub headers: BTreeMap<String, String>,
}

impl ClientConfig {
    /// Create a configuration with the default timeout and no headers
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            headers: BTreeMap::new(),
        }
    }

    /// Overlay per-call overrides onto this configuration
    ///
    /// Returns a new configuration without mutating either input. Headers are
    /// merged key-by-key with the override winning; defaults the override does
    /// not name are preserved.
    pub fn merge(&self, overrides: &RequestOverrides) -> ClientConfig {
        let mut merged = self.clone();
        if let Some(timeout) = overrides.timeout {
            merged.timeout = timeout;
        }
        for (key, value) in &overrides.headers {
            merged.headers.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Join `path` onto the base URL
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Caller-supplied options overlaid onto a [`ClientConfig`] for one call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOverrides {
    /// Headers merged over the default headers, override-wins
    pub headers: BTreeMap<String, String>,
    /// Replaces the default timeout when set
    pub timeout: Option<Duration>,
}

impl RequestOverrides {
    /// Create an empty set of overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header override
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Override the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
