//! HTTP client wrapper

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{ClientConfig, RequestOverrides};
use crate::error::HttpError;
use crate::params;
use crate::progress::{NoopProgress, ProgressGuard, ProgressSignal};

/// HTTP client wrapper
///
/// Owns one `reqwest::Client` configured from a [`ClientConfig`]. Build it
/// once at startup and pass it by handle; clones share the underlying
/// connection pool and progress signal. Every request merges per-call options
/// over the default configuration, toggles the progress signal, and returns
/// the deserialized response body only.
///
/// Non-2xx responses are treated as errors and surface as
/// [`HttpError::Status`].
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
    progress: Arc<dyn ProgressSignal>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a new client builder
    pub fn builder(base_url: impl Into<String>) -> HttpClientBuilder {
        HttpClientBuilder::new(base_url)
    }

    /// The default configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Overlay per-call overrides onto the default configuration
    pub fn merged_config(&self, overrides: &RequestOverrides) -> ClientConfig {
        self.config.merge(overrides)
    }

    /// GET request, returns JSON deserialized to R
    ///
    /// `params` is serialized into the query string with repeated-key array
    /// format (see [`crate::to_query_string`]). Pass `&()` for no parameters.
    pub async fn get<P, R>(&self, path: &str, query: &P) -> Result<R, HttpError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.get_with(path, query, &RequestOverrides::default())
            .await
    }

    /// GET request with per-call overrides
    pub async fn get_with<P, R>(
        &self,
        path: &str,
        query: &P,
        overrides: &RequestOverrides,
    ) -> Result<R, HttpError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let query = params::to_query_string(query)?;
        let mut url = self.config.url_for(path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        tracing::debug!("GET {}", url);
        self.request(self.inner.get(&url), overrides).await
    }

    /// POST with JSON body, returns JSON deserialized to R
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, HttpError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.post_with(path, body, &RequestOverrides::default())
            .await
    }

    /// POST with JSON body and per-call overrides
    pub async fn post_with<B, R>(
        &self,
        path: &str,
        body: &B,
        overrides: &RequestOverrides,
    ) -> Result<R, HttpError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.url_for(path);
        tracing::debug!("POST {}", url);
        self.request(self.inner.post(&url).json(body), overrides)
            .await
    }

    /// PUT with JSON body, returns JSON deserialized to R
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, HttpError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.url_for(path);
        tracing::debug!("PUT {}", url);
        self.request(self.inner.put(&url).json(body), &RequestOverrides::default())
            .await
    }

    /// PATCH with JSON body, returns JSON deserialized to R
    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, HttpError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.url_for(path);
        tracing::debug!("PATCH {}", url);
        self.request(self.inner.patch(&url).json(body), &RequestOverrides::default())
            .await
    }

    /// DELETE request, returns JSON deserialized to R
    pub async fn delete<R>(&self, path: &str) -> Result<R, HttpError>
    where
        R: DeserializeOwned,
    {
        let url = self.config.url_for(path);
        tracing::debug!("DELETE {}", url);
        self.request(self.inner.delete(&url), &RequestOverrides::default())
            .await
    }

    /// Single dispatch path shared by all verbs
    ///
    /// The progress guard is held across the await points so `done` fires
    /// exactly once, before any error reaches the caller.
    async fn request<R>(
        &self,
        builder: reqwest::RequestBuilder,
        overrides: &RequestOverrides,
    ) -> Result<R, HttpError>
    where
        R: DeserializeOwned,
    {
        let merged = self.config.merge(overrides);

        let mut builder = builder;
        for (key, value) in &merged.headers {
            builder = builder.header(key, value);
        }
        if merged.timeout != self.config.timeout {
            builder = builder.timeout(merged.timeout);
        }

        let _guard = ProgressGuard::begin(Arc::clone(&self.progress));

        let response = builder.send().await.map_err(HttpError::from)?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(HttpError::from)?;
        serde_json::from_str(&body).map_err(|err| {
            tracing::warn!("Response body did not deserialize: {}", err);
            HttpError::from(err)
        })
    }
}

/// Builder for [`HttpClient`]
pub struct HttpClientBuilder {
    config: ClientConfig,
    progress: Option<Arc<dyn ProgressSignal>>,
}

impl fmt::Debug for HttpClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClientBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpClientBuilder {
    /// Start a builder for the given base endpoint URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(base_url),
            progress: None,
        }
    }

    /// Set the request timeout (default 10 seconds)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn bearer_token(mut self, token: impl AsRef<str>) -> Self {
        self.config.headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", token.as_ref()),
        );
        self
    }

    /// Add a header sent with every request
    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.insert(key.into(), value.into());
        self
    }

    /// Toggle this signal around every request (default: no-op)
    pub fn progress(mut self, signal: Arc<dyn ProgressSignal>) -> Self {
        self.progress = Some(signal);
        self
    }

    /// Build the HTTP client
    pub fn build(self) -> Result<HttpClient, HttpError> {
        url::Url::parse(&self.config.base_url)
            .map_err(|e| HttpError::Build(format!("invalid base URL: {}", e)))?;

        let inner = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;

        Ok(HttpClient {
            inner,
            config: self.config,
            progress: self.progress.unwrap_or_else(|| Arc::new(NoopProgress)),
        })
    }
}
