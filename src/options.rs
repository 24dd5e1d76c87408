use reqwest::Method;
use serde_json::Value as JsonValue;

/// Timeout used when [`RequestOptions::timeout_ms`] is zero.
pub const DEFAULT_TIMEOUT_MS: u64 = 8_000;

/// Configures one fetch invocation: timeout, retry policy, and the request
/// parameters forwarded verbatim to the transport.
///
/// The client never mutates an options value; the same instance can be
/// reused across calls.
#[derive(Clone, Debug)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: Method,
    /// Extra request headers, applied in order.
    pub headers: Vec<(String, String)>,
    /// Optional JSON request body.
    pub body: Option<JsonValue>,
    /// Per-attempt timeout in milliseconds. Zero means
    /// [`DEFAULT_TIMEOUT_MS`].
    pub timeout_ms: u64,
    /// Additional attempts after the first one.
    pub retries: usize,
    /// Base backoff in milliseconds; attempt `n` waits `n` times this.
    pub retry_delay_ms: u64,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: 0,
            retry_delay_ms: 300,
        }
    }
}

impl RequestOptions {
    /// Options for a plain GET with default timeout and no retries.
    pub fn get() -> Self {
        Self::default()
    }

    /// Sets the HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Appends a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets a JSON request body.
    pub fn with_body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the per-attempt timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the number of retries after the initial attempt.
    pub fn with_retries(mut self, retries: usize) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the base retry backoff in milliseconds.
    pub fn with_retry_delay_ms(mut self, retry_delay_ms: u64) -> Self {
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    /// Effective timeout for one attempt, substituting the default for zero.
    pub(crate) fn effective_timeout_ms(&self) -> u64 {
        if self.timeout_ms == 0 {
            DEFAULT_TIMEOUT_MS
        } else {
            self.timeout_ms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RequestOptions, DEFAULT_TIMEOUT_MS};
    use reqwest::Method;

    #[test]
    fn defaults_are_single_attempt_get() {
        let opts = RequestOptions::default();
        assert_eq!(opts.method, Method::GET);
        assert_eq!(opts.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(opts.retries, 0);
        assert!(opts.headers.is_empty());
        assert!(opts.body.is_none());
    }

    #[test]
    fn zero_timeout_falls_back_to_default() {
        let opts = RequestOptions::default().with_timeout_ms(0);
        assert_eq!(opts.effective_timeout_ms(), DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn builder_chains_accumulate() {
        let opts = RequestOptions::get()
            .with_method(Method::POST)
            .with_header("x-api-key", "k")
            .with_retries(2)
            .with_retry_delay_ms(50);
        assert_eq!(opts.method, Method::POST);
        assert_eq!(opts.headers.len(), 1);
        assert_eq!(opts.retries, 2);
        assert_eq!(opts.retry_delay_ms, 50);
    }
}
