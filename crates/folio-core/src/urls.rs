//! URL builders for the public endpoints derived from a repository identifier.
//!
//! Every builder takes a [`RepoId`], whose segments are already restricted to
//! URL-safe characters, so none of these can produce a malformed URL.

use crate::DEFAULT_IMAGE_URL;
use crate::repo_id::RepoId;

const REPO_HOST: &str = "https://github.com";
const SOCIAL_PREVIEW_HOST: &str = "https://opengraph.githubassets.com";

/// Public web page of a repository.
#[must_use]
pub fn repo_page_url(id: &RepoId) -> String {
    format!("{REPO_HOST}/{}/{}", id.owner(), id.name())
}

/// Social preview image for a repository. Always resolvable; never probed.
#[must_use]
pub fn social_preview_url(id: &RepoId) -> String {
    format!("{SOCIAL_PREVIEW_HOST}/1/{}/{}", id.owner(), id.name())
}

/// Card image: the custom override verbatim if given, else the repository's
/// social preview, else the default placeholder.
#[must_use]
pub fn card_image_url(id: Option<&RepoId>, custom_image: Option<&str>) -> String {
    match (custom_image, id) {
        (Some(custom), _) => custom.to_string(),
        (None, Some(id)) => social_preview_url(id),
        (None, None) => DEFAULT_IMAGE_URL.to_string(),
    }
}
