//! Repository metadata and language breakdown requests.

use folio_core::{NO_DESCRIPTION, RemotePayload, RepoId, Stat, urls};
use reqwest::Url;

use crate::{GithubClient, error::FetchError, http::check_response};

#[derive(serde::Deserialize)]
struct RepoResponse {
    name: String,
    description: Option<String>,
    stargazers_count: u64,
    forks_count: u64,
    languages_url: String,
    homepage: Option<String>,
    html_url: String,
    #[serde(default)]
    topics: Option<Vec<String>>,
}

impl RepoResponse {
    fn into_payload(self, languages: Vec<String>, image: String, fetched_at: i64) -> RemotePayload {
        RemotePayload {
            name: self.name,
            description: self
                .description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            stars: Stat::Count(self.stargazers_count),
            forks: Stat::Count(self.forks_count),
            languages,
            homepage: self.homepage.filter(|h| !h.trim().is_empty()),
            html_url: self.html_url,
            topics: self.topics.unwrap_or_default(),
            image,
            last_updated: Some(fetched_at),
        }
    }
}

/// The languages endpoint answers with `{ "<language>": <bytes>, ... }`;
/// only the keys matter.
fn language_names(body: &serde_json::Value) -> Result<Vec<String>, FetchError> {
    body.as_object()
        .map(|map| map.keys().cloned().collect())
        .ok_or_else(|| FetchError::Parse("languages response is not a JSON object".into()))
}

impl GithubClient {
    pub(crate) async fn fetch_repo(
        &self,
        id: &RepoId,
        custom_image: Option<&str>,
    ) -> Result<RemotePayload, FetchError> {
        let url = self.base.repo(id);
        tracing::debug!(repo = %id, %url, "fetching repository metadata");

        let resp = check_response(self.http.get(url).send().await?).await?;
        let data: RepoResponse = resp
            .json()
            .await
            .map_err(|e| FetchError::Parse(format!("repository response for {id}: {e}")))?;

        let languages = self.fetch_languages(&data.languages_url).await?;
        let image = urls::card_image_url(Some(id), custom_image);

        Ok(data.into_payload(languages, image, folio_core::now_millis()))
    }

    async fn fetch_languages(&self, languages_url: &str) -> Result<Vec<String>, FetchError> {
        let url = Url::parse(languages_url)
            .map_err(|e| FetchError::Parse(format!("languages_url '{languages_url}': {e}")))?;
        let resp = check_response(self.http.get(url).send().await?).await?;
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| FetchError::Parse(format!("languages response: {e}")))?;
        language_names(&body)
    }
}
