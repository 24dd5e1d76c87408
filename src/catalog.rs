//! Typed client for the wger exercise catalog REST API.
//!
//! Thin wrapper over [`FetchClient`]: the catalog endpoint stays an opaque
//! paginated JSON API, only its envelope is typed here. All calls go
//! through the retrying fetch, so catalog reads inherit whatever timeout
//! and retry policy the caller configures.

use serde::Deserialize;

use crate::{FetchClient, FetchError, RequestOptions, Result};

/// Public wger `exerciseinfo` endpoint.
pub const DEFAULT_BASE_URL: &str = "https://wger.de/api/v2/exerciseinfo/";

/// wger language ID for English.
pub const LANGUAGE_ENGLISH: u16 = 2;

/// One page of the catalog's standard paginated envelope.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ExercisePage {
    /// Total number of exercises matching the query.
    pub count: u64,
    /// URL of the next page, when there is one.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, when there is one.
    #[serde(default)]
    pub previous: Option<String>,
    /// Exercises on this page.
    pub results: Vec<Exercise>,
}

/// One catalog entry.
///
/// The API has moved names and descriptions between top-level fields and
/// per-language `translations` across versions, so both are modeled and
/// every field beyond `id` is optional.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<ExerciseCategory>,
    #[serde(default)]
    pub translations: Vec<ExerciseTranslation>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ExerciseCategory {
    pub id: u64,
    pub name: String,
}

/// Per-language name/description pair.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ExerciseTranslation {
    pub language: u16,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Exercise {
    /// Display name for the given language.
    ///
    /// Prefers the top-level `name`, then the matching translation, then
    /// any translation that carries a name.
    pub fn resolved_name(&self, language: u16) -> Option<&str> {
        if let Some(name) = self.name.as_deref() {
            if !name.is_empty() {
                return Some(name);
            }
        }
        self.translations
            .iter()
            .find(|t| t.language == language)
            .and_then(|t| t.name.as_deref())
            .or_else(|| self.translations.iter().find_map(|t| t.name.as_deref()))
    }
}

/// Client for listing exercises from the catalog API.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    fetch: FetchClient,
    base_url: String,
    options: RequestOptions,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self {
            fetch: FetchClient::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            options: RequestOptions::default(),
        }
    }
}

impl CatalogClient {
    /// Creates a client against the public wger endpoint with default
    /// request options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the client at a different catalog endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Applies timeout/retry options to every catalog call.
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Shares an existing [`FetchClient`] (and its connection pool).
    pub fn with_fetch_client(mut self, fetch: FetchClient) -> Self {
        self.fetch = fetch;
        self
    }

    /// Fetches one page of exercises for a language.
    pub async fn exercise_page(&self, language: u16, limit: u32) -> Result<ExercisePage> {
        let url = format!(
            "{}?language={language}&limit={limit}",
            self.base_url.trim_end_matches('?')
        );
        self.fetch_page(&url).await
    }

    /// Fetches the first page and returns its entries.
    pub async fn exercises(&self, language: u16, limit: u32) -> Result<Vec<Exercise>> {
        Ok(self.exercise_page(language, limit).await?.results)
    }

    /// Follows a page's `next` link. Returns `Ok(None)` on the last page.
    pub async fn next_page(&self, page: &ExercisePage) -> Result<Option<ExercisePage>> {
        match &page.next {
            Some(url) => Ok(Some(self.fetch_page(url).await?)),
            None => Ok(None),
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<ExercisePage> {
        let body = self.fetch.fetch_with_retry(url, &self.options).await?;
        serde_json::from_value(body)
            .map_err(|err| FetchError::Decode(format!("invalid exercise page JSON: {err}")))
    }
}
