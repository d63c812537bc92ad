//! HTTP client wrapper and cache-key factory for data-fetching layers
//!
//! This crate provides the two pieces a data-fetching layer needs in front of
//! an HTTP API:
//!
//! - [`HttpClient`]: one shared, pre-configured client. It carries a default
//!   configuration (base URL, timeout, bearer Authorization header),
//!   serializes query parameters with repeated-key array format, toggles a
//!   caller-supplied [`ProgressSignal`] around every request, and exposes
//!   typed verb methods returning the deserialized response body.
//! - [`QueryKeyFactory`]: ordered, structurally comparable cache-key tuples
//!   for "list" queries, consumed by an external caching/query layer.
//!
//! # Example
//!
//! ```no_run
//! use query_client::{HttpClient, HttpError};
//! use serde::Deserialize;
//! use serde_json::json;
//!
//! #[derive(Deserialize)]
//! struct Article {
//!     title: String,
//! }
//!
//! async fn example() -> Result<Vec<Article>, HttpError> {
//!     let client = HttpClient::builder("https://api.example.com")
//!         .bearer_token("example-token")
//!         .build()?;
//!
//!     client.get("/articles", &json!({"page": 2})).await
//! }
//! ```

mod client;
mod config;
mod error;
mod keys;
mod params;
mod progress;

pub use client::{HttpClient, HttpClientBuilder};
pub use config::{ClientConfig, RequestOverrides, DEFAULT_TIMEOUT};
pub use error::HttpError;
pub use keys::{KeySegment, QueryKey, QueryKeyFactory};
pub use params::to_query_string;
pub use progress::{NoopProgress, ProgressSignal};
