use serde_json::Value as JsonValue;

/// Error type returned by this crate.
///
/// Every failure path produces exactly one of these variants; nothing
/// escapes as an unstructured panic or raw transport error.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Non-success HTTP status, with the error body decoded best-effort.
    ///
    /// `body` is the server's JSON diagnostic when it parses, the raw
    /// response text as a JSON string when it does not, and `None` when the
    /// body was empty.
    #[error("http error {status}")]
    Http {
        status: u16,
        body: Option<JsonValue>,
    },
    /// The attempt was cancelled before settling, either by the per-attempt
    /// timeout or by an external abort. The two causes are deliberately not
    /// distinguished at this layer.
    #[error("Request aborted or timed out")]
    Aborted,
    /// Network or request execution error from `reqwest` that carries no
    /// HTTP status (connect failure, TLS failure, broken body stream).
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// A success response whose body could not be parsed as JSON, or a
    /// payload that did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status code, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decoded error body, when the server sent one.
    pub fn body(&self) -> Option<&JsonValue> {
        match self {
            Self::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Whether the failure is presumed transient and eligible for retry.
    ///
    /// Retryable: 5xx statuses, aborts/timeouts, and transport failures
    /// with no status. 4xx means the request itself is malformed and will
    /// not improve with repetition; decode failures are likewise terminal.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => (500..=599).contains(status),
            Self::Aborted => true,
            Self::Transport(_) => true,
            Self::Decode(_) => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    /// Classifies a transport-level failure. Timeouts map to [`Aborted`];
    /// everything else stays a [`Transport`] error.
    ///
    /// [`Aborted`]: FetchError::Aborted
    /// [`Transport`]: FetchError::Transport
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Aborted
        } else {
            Self::Transport(err)
        }
    }
}
