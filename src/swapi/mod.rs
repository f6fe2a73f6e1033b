//! HTTP client for the Star Wars API (SWAPI).
//!
//! The client is a thin wrapper around `reqwest` that knows the SWAPI base URL and
//! exposes the endpoints the cache needs, grouped by resource:
//!
//! ```ignore
//! let swapi_client = SwapiClient::builder()
//!     .base_url("https://swapi.dev/api")
//!     .user_agent("swapi-cache/0.1.0")
//!     .build()?;
//!
//! let films = swapi_client.films().get_films().await?;
//! let detail = swapi_client.films().get_film(&films[0].url).await?;
//! ```
//!
//! No retry or timeout policy is applied, a failed request is returned to the caller.

pub mod model;

use serde::de::DeserializeOwned;

use crate::swapi::model::{ExternalCharacter, ExternalFilm, ExternalFilmList};

/// Base URL of the public SWAPI deployment.
pub static DEFAULT_SWAPI_URL: &str = "https://swapi.dev/api";

/// Client for the SWAPI REST API.
///
/// Cheap to clone, clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    /// Creates a client for `base_url` with default `reqwest` settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Starts building a client with a custom base URL and user agent.
    pub fn builder() -> SwapiClientBuilder {
        SwapiClientBuilder::default()
    }

    /// Base URL all relative endpoints are resolved against, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Film resource endpoints.
    pub fn films(&self) -> FilmsEndpoints<'_> {
        FilmsEndpoints { client: self }
    }

    /// People resource endpoints.
    pub fn people(&self) -> PeopleEndpoints<'_> {
        PeopleEndpoints { client: self }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, reqwest::Error> {
        tracing::debug!("Requesting SWAPI resource {}", url);

        self.http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}

/// Builder for [`SwapiClient`].
#[derive(Default)]
pub struct SwapiClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl SwapiClientBuilder {
    /// Sets the base URL, defaults to [`DEFAULT_SWAPI_URL`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the client.
    ///
    /// # Returns
    /// - `Ok(SwapiClient)` - Configured client
    /// - `Err(reqwest::Error)` - The HTTP client could not be initialized
    pub fn build(self) -> Result<SwapiClient, reqwest::Error> {
        let mut http = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }

        Ok(SwapiClient {
            http: http.build()?,
            base_url: normalize_base_url(
                self.base_url
                    .unwrap_or_else(|| DEFAULT_SWAPI_URL.to_string()),
            ),
        })
    }
}

/// Endpoints under `/films/`.
pub struct FilmsEndpoints<'a> {
    client: &'a SwapiClient,
}

impl<'a> FilmsEndpoints<'a> {
    /// Fetches the film list from `GET {base_url}/films/`.
    pub async fn get_films(&self) -> Result<Vec<ExternalFilm>, reqwest::Error> {
        let url = format!("{}/films/", self.client.base_url);
        let list: ExternalFilmList = self.client.get_json(&url).await?;

        Ok(list.results)
    }

    /// Fetches a single film from its canonical SWAPI URL.
    pub async fn get_film(&self, url: &str) -> Result<ExternalFilm, reqwest::Error> {
        self.client.get_json(url).await
    }
}

/// Endpoints under `/people/`.
pub struct PeopleEndpoints<'a> {
    client: &'a SwapiClient,
}

impl<'a> PeopleEndpoints<'a> {
    /// Fetches a single character from its canonical SWAPI URL.
    pub async fn get_character(&self, url: &str) -> Result<ExternalCharacter, reqwest::Error> {
        self.client.get_json(url).await
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
