use std::future::Future;

use folio_core::{RemotePayload, RepoId};
use folio_github::{FetchError, GithubClient};

/// Where live repository payloads come from.
///
/// Implemented by [`GithubClient`]; the resolver only depends on this seam.
pub trait RemoteSource {
    fn fetch_remote(
        &self,
        id: &RepoId,
        custom_image: Option<&str>,
    ) -> impl Future<Output = Result<RemotePayload, FetchError>>;
}

impl RemoteSource for GithubClient {
    fn fetch_remote(
        &self,
        id: &RepoId,
        custom_image: Option<&str>,
    ) -> impl Future<Output = Result<RemotePayload, FetchError>> {
        Self::fetch_remote(self, id, custom_image)
    }
}
