use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The `owner/name` pair uniquely addressing a hosted repository.
///
/// Both segments are restricted to ASCII alphanumerics, `-`, `_` and `.`,
/// which is what the hosting service itself allows. That restriction is what
/// lets the URL builders in [`crate::urls`] interpolate segments without
/// escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    /// Build an identifier from its two segments.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRepoId`] if either segment is empty or
    /// contains a character outside the allowed set.
    pub fn new(owner: &str, name: &str) -> Result<Self, CoreError> {
        let value = format!("{owner}/{name}");
        for (label, segment) in [("owner", owner), ("name", name)] {
            if segment.is_empty() {
                return Err(invalid(&value, &format!("{label} segment is empty")));
            }
            if segment == "." || segment == ".." {
                return Err(invalid(&value, &format!("{label} segment is a dot path")));
            }
            if let Some(bad) = segment.chars().find(|c| !is_segment_char(*c)) {
                return Err(invalid(
                    &value,
                    &format!("{label} segment contains '{bad}'"),
                ));
            }
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Repository owner (user or organization).
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name, the trailing segment of the identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

const fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

fn invalid(value: &str, reason: &str) -> CoreError {
    CoreError::InvalidRepoId {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl FromStr for RepoId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((owner, name)) = trimmed.split_once('/') else {
            return Err(invalid(trimmed, "expected 'owner/name'"));
        };
        if name.contains('/') {
            return Err(invalid(trimmed, "expected exactly one '/'"));
        }
        Self::new(owner, name)
    }
}

impl TryFrom<String> for RepoId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RepoId> for String {
    fn from(id: RepoId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
