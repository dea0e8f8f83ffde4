//! # folio-github
//!
//! Repository metadata client for Folio.
//!
//! Fetches a repository's metadata and language breakdown from the hosting
//! API with a bounded wait per request, and normalizes the result into a
//! [`RemotePayload`]. Rate limiting is reported as the distinguished
//! [`FetchError::RateLimited`] so callers can fall back instead of retrying.

mod endpoint;
mod error;
mod http;
mod repo;

pub use endpoint::ApiBase;
pub use error::FetchError;

use folio_config::FetchConfig;
use folio_core::{RemotePayload, RepoId};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the repository metadata API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base: ApiBase,
}

impl GithubClient {
    /// Create a client from fetch configuration.
    ///
    /// The configured timeout bounds every request individually, so one slow
    /// request never shortens the budget of a concurrent sibling.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Config`] if the API base or a header value is
    /// invalid, or [`FetchError::Http`] if the underlying client fails to build.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let base = ApiBase::parse(&config.api_base)?;

        let mut headers = HeaderMap::new();
        let accept = HeaderValue::from_str(&config.accept)
            .map_err(|e| FetchError::Config(format!("accept header: {e}")))?;
        headers.insert(ACCEPT, accept);

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self { http, base })
    }

    #[must_use]
    pub const fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Fetch live metadata for `id`.
    ///
    /// `custom_image` is the project's image override; when absent the card
    /// image is the repository's social preview.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::RateLimited`] on 403, and any other
    /// [`FetchError`] for timeouts, transport failures, non-success statuses,
    /// or malformed bodies on either the metadata or languages request.
    pub async fn fetch_remote(
        &self,
        id: &RepoId,
        custom_image: Option<&str>,
    ) -> Result<RemotePayload, FetchError> {
        self.fetch_repo(id, custom_image).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let client = GithubClient::new(&FetchConfig::default()).unwrap();
        assert_eq!(client.base().as_str(), "https://api.github.com/repos");
    }

    #[test]
    fn rejects_invalid_accept_header() {
        let config = FetchConfig {
            accept: "bad\nvalue".into(),
            ..FetchConfig::default()
        };
        assert!(matches!(
            GithubClient::new(&config),
            Err(FetchError::Config(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let config = FetchConfig {
            api_base: "http://127.0.0.1:9/repos".into(),
            timeout_secs: 1,
            ..FetchConfig::default()
        };
        let client = GithubClient::new(&config).unwrap();
        let id: RepoId = "o/r".parse().unwrap();
        let err = client.fetch_remote(&id, None).await.unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
        assert!(!err.is_rate_limited());
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_fetch_remote() {
        let client = GithubClient::new(&FetchConfig::default()).unwrap();
        let id: RepoId = "rust-lang/rust".parse().unwrap();
        match client.fetch_remote(&id, None).await {
            Ok(payload) => {
                println!(
                    "{} | {} stars | {} forks | {:?}",
                    payload.name, payload.stars, payload.forks, payload.languages
                );
                assert_eq!(payload.html_url, "https://github.com/rust-lang/rust");
            }
            Err(e) if e.is_rate_limited() => println!("rate limited: {e}"),
            Err(e) => panic!("live fetch failed: {e}"),
        }
    }
}
