use serde::{Deserialize, Serialize};
use crate::core::UserProfile;

/// Profile with the score it was ranked by
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedProfile {
    /// Identifier the profile was requested with
    pub identifier: String,

    pub profile: UserProfile,

    /// Score under the selector used for ranking
    pub score: i64,
}

impl RankedProfile {
    pub fn new(identifier: impl Into<String>, profile: UserProfile, score: i64) -> Self {
        Self {
            identifier: identifier.into(),
            profile,
            score,
        }
    }

    /// Rank name under the given language, or overall
    pub fn rank_name(&self, language: Option<&str>) -> &str {
        match language {
            Some(lang) => self
                .profile
                .languages
                .get(lang)
                .map(|r| r.name.as_str())
                .unwrap_or(""),
            None => self.profile.overall.name.as_str(),
        }
    }
}
