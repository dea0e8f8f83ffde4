//! Typed builder for metadata API request URLs.

use folio_core::RepoId;
use reqwest::Url;

use crate::error::FetchError;

/// Validated base URL of the metadata API (e.g. `https://api.github.com/repos`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Url);

impl ApiBase {
    /// Parse and validate a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Config`] if `base` is not an absolute http(s)
    /// URL that paths can be appended to.
    pub fn parse(base: &str) -> Result<Self, FetchError> {
        let url = Url::parse(base)
            .map_err(|e| FetchError::Config(format!("api base '{base}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::Config(format!(
                "api base '{base}': unsupported scheme '{}'",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() || url.query().is_some() || url.fragment().is_some() {
            return Err(FetchError::Config(format!(
                "api base '{base}': must be a plain base URL"
            )));
        }
        Ok(Self(url))
    }

    /// `{base}/{owner}/{repo}`.
    #[must_use]
    pub fn repo(&self, id: &RepoId) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id.owner()).push(id.name());
        }
        url
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
