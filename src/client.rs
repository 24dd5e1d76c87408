use std::time::Duration;

use serde_json::Value as JsonValue;
use tokio::time::sleep;

use crate::{
    decode::{decode_error_body, decode_success_body},
    FetchError, RequestOptions, Result,
};

/// HTTP client wrapping `reqwest` with a per-attempt timeout and a bounded
/// retry policy.
///
/// Cloning is cheap; the underlying connection pool is shared between
/// clones. A client holds no per-call state, so one instance can serve any
/// number of concurrent calls.
#[derive(Clone, Debug, Default)]
pub struct FetchClient {
    http: reqwest::Client,
}

impl FetchClient {
    /// Creates a client with a fresh connection pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client on top of an existing `reqwest::Client`, sharing
    /// its connection pool and TLS configuration.
    pub fn with_http(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Performs exactly one HTTP request and decodes the body as JSON.
    ///
    /// The attempt is bounded by `options.timeout_ms`: a timer is armed
    /// with the request and the in-flight call is cancelled when it fires,
    /// surfacing as [`FetchError::Aborted`]. The timer's lifetime is owned
    /// by the request future, so it is torn down on every exit path.
    ///
    /// Non-success statuses become [`FetchError::Http`] with the error body
    /// decoded best-effort; a success body that is not valid JSON becomes
    /// [`FetchError::Decode`].
    pub async fn fetch_json(&self, url: &str, options: &RequestOptions) -> Result<JsonValue> {
        let mut request = self
            .http
            .request(options.method.clone(), url)
            .timeout(Duration::from_millis(options.effective_timeout_ms()));

        for (name, value) in &options.headers {
            request = request.header(name, value);
        }
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        // From<reqwest::Error> maps timeouts to Aborted, the rest to
        // Transport.
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                body: decode_error_body(&text),
            });
        }

        decode_success_body(&text)
    }

    /// Performs a request with up to `options.retries` additional attempts.
    ///
    /// Only transient failures are retried: 5xx statuses, timeouts, and
    /// transport errors with no status (see [`FetchError::is_retryable`]).
    /// Attempt `n` is preceded by a sleep of `retry_delay_ms * n`, fully
    /// awaited before the next attempt starts, so attempts are strictly
    /// sequential. Success at any attempt returns immediately; a terminal
    /// failure returns the last error unchanged.
    pub async fn fetch_with_retry(&self, url: &str, options: &RequestOptions) -> Result<JsonValue> {
        let mut attempt = 1usize;
        loop {
            let err = match self.fetch_json(url, options).await {
                Ok(body) => return Ok(body),
                Err(err) => err,
            };

            if !err.is_retryable() || attempt > options.retries {
                return Err(err);
            }

            let delay = backoff_delay(options.retry_delay_ms, attempt);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                attempt,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "retrying request after backoff"
            );

            sleep(delay).await;
            attempt += 1;
        }
    }
}

/// Linear backoff: attempt `n` waits `n` base units.
fn backoff_delay(base_ms: u64, attempt: usize) -> Duration {
    Duration::from_millis(base_ms.saturating_mul(attempt as u64))
}

/// Issues one timed request with a throwaway client.
///
/// Convenience entry point for one-off calls; hold a [`FetchClient`] when
/// making repeated requests so the connection pool is reused.
pub async fn fetch_json_with_timeout(url: &str, options: &RequestOptions) -> Result<JsonValue> {
    FetchClient::new().fetch_json(url, options).await
}

/// Issues a request with retries using a throwaway client.
///
/// See [`FetchClient::fetch_with_retry`] for the retry contract.
pub async fn fetch_with_retry(url: &str, options: &RequestOptions) -> Result<JsonValue> {
    FetchClient::new().fetch_with_retry(url, options).await
}
