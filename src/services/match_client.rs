use crate::config::Settings;
use crate::models::{BackendStatus, Match, MatchAllResponse, Profile};
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

/// Errors that can occur when talking to the matchmaking backend
#[derive(Debug, Error)]
pub enum MatchClientError {
    /// The backend base URL is missing. Raised before any network I/O.
    #[error("{0}")]
    Configuration(String),

    /// The backend answered with a non-2xx status
    #[error("Backend error {}: {body}", .status.as_u16())]
    Backend { status: StatusCode, body: String },

    /// Network-level failure from the HTTP transport, passed through as-is
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatchClientError>;

/// Where the client sends its requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: Option<String>,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: Some(api_base_url.into()),
        }
    }

    /// Base URL without a trailing slash, or a configuration error if unset or blank
    fn require_base_url(&self) -> Result<&str> {
        match self.api_base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url.trim_end_matches('/')),
            _ => Err(MatchClientError::Configuration(
                "API base URL is not set. Set api.base_url in config/local.toml, \
                 or export HACKMATCH__API__BASE_URL (API_URL is also accepted)."
                    .to_string(),
            )),
        }
    }
}

/// Matchmaking backend client
///
/// Every call is a single independent request: no retries, no caching and
/// no shared mutable state, so one client can be cloned freely across tasks.
/// The base URL is checked on each call rather than at construction.
#[derive(Debug, Clone)]
pub struct MatchClient {
    config: ClientConfig,
    client: Client,
}

impl MatchClient {
    /// Create a client with a default [`reqwest::Client`] (no request timeout)
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a client on top of a caller-configured [`reqwest::Client`].
    ///
    /// Timeouts, proxies and similar transport concerns belong there.
    pub fn with_client(config: ClientConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.client_config())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit `profile` to `POST <base>/match_all` and return the ranked matches
    ///
    /// Matches are returned in the order the backend produced them. A success
    /// response without a `matches` field yields an empty list.
    pub async fn fetch_matches(&self, profile: &Profile) -> Result<Vec<Match>> {
        let base_url = self.config.require_base_url()?;
        let url = format!("{}/match_all", base_url);

        tracing::debug!("Requesting matches from: {}", url);

        let response = self.client.post(&url).json(profile).send().await?;
        let response = ensure_success(response).await?;

        let body = response.bytes().await?;
        let envelope: Option<MatchAllResponse> = serde_json::from_slice(&body)?;
        let matches = envelope.unwrap_or_default().into_matches();

        tracing::debug!("Received {} matches for {}", matches.len(), profile.name);

        Ok(matches)
    }

    /// Alias of [`MatchClient::fetch_matches`]
    pub async fn get_matches(&self, profile: &Profile) -> Result<Vec<Match>> {
        self.fetch_matches(profile).await
    }

    /// Query the backend root route
    pub async fn health(&self) -> Result<BackendStatus> {
        let base_url = self.config.require_base_url()?;
        let url = format!("{}/", base_url);

        tracing::debug!("Checking backend status at: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response).await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// One-shot [`MatchClient::fetch_matches`] with a fresh client
pub async fn fetch_matches(config: &ClientConfig, profile: &Profile) -> Result<Vec<Match>> {
    MatchClient::new(config.clone()).fetch_matches(profile).await
}

/// Alias of [`fetch_matches`]
pub async fn get_matches(config: &ClientConfig, profile: &Profile) -> Result<Vec<Match>> {
    fetch_matches(config, profile).await
}

/// Turn a non-2xx response into [`MatchClientError::Backend`]
///
/// The body text is best-effort; when it cannot be read or is empty the
/// status reason phrase is used instead.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body = if text.is_empty() {
        status.canonical_reason().unwrap_or_default().to_string()
    } else {
        text
    };

    tracing::debug!("Backend returned {}: {}", status, body);

    Err(MatchClientError::Backend { status, body })
}
