//! `fitfetch` is a resilient async JSON fetch client.
//!
//! One HTTP request, one enforced timeout, and an optional bounded retry
//! with linear backoff:
//! - [`FetchClient::fetch_json`] — a single timed attempt
//! - [`FetchClient::fetch_with_retry`] — transient failures retried up to a
//!   configured bound
//!
//! All failures are classified into [`FetchError`]. The [`catalog`] module
//! layers a typed client for the wger exercise catalog API on top.

mod client;
mod decode;
mod error;
mod options;

pub mod catalog;

pub use client::{fetch_json_with_timeout, fetch_with_retry, FetchClient};
pub use error::FetchError;
pub use options::{RequestOptions, DEFAULT_TIMEOUT_MS};

pub type Result<T> = std::result::Result<T, FetchError>;
