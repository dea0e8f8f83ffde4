use std::fmt;

use serde::{Deserialize, Serialize};

/// A star or fork count: either a real number or a display marker.
///
/// Markers stand in when the count is unknown (`?`) or meaningless for the
/// project (`-`, closed-source entries).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stat {
    Count(u64),
    Marker(String),
}

impl Stat {
    pub const UNKNOWN: &'static str = "?";
    pub const NOT_APPLICABLE: &'static str = "-";

    /// The `?` marker for a count that could not be fetched.
    #[must_use]
    pub fn unknown() -> Self {
        Self::Marker(Self::UNKNOWN.to_string())
    }

    /// The `-` marker for a project without a hosted repository.
    #[must_use]
    pub fn not_applicable() -> Self {
        Self::Marker(Self::NOT_APPLICABLE.to_string())
    }

    #[must_use]
    pub const fn count(&self) -> Option<u64> {
        match self {
            Self::Count(n) => Some(*n),
            Self::Marker(_) => None,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Marker(m) => f.write_str(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_markers_deserialize() {
        let stats: Vec<Stat> = serde_json::from_str(r#"[42, "?", "-"]"#).unwrap();
        assert_eq!(stats, vec![Stat::Count(42), Stat::unknown(), Stat::not_applicable()]);
    }

    #[test]
    fn display_matches_card_text() {
        assert_eq!(Stat::Count(7).to_string(), "7");
        assert_eq!(Stat::unknown().to_string(), "?");
        assert_eq!(Stat::not_applicable().count(), None);
    }
}
