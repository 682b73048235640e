use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Treat a missing, null or blank clan as no clan
fn deserialize_clan<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let clan: Option<String> = Option::deserialize(deserializer)?;
    Ok(clan.filter(|c| !c.trim().is_empty()))
}

/// One ranking entry of a profile (overall or per language)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rank {
    /// Rank level (negative for kyu, positive for dan)
    #[serde(default)]
    pub rank: i32,

    /// Display name, e.g. "4 kyu"
    #[serde(default)]
    pub name: String,

    /// Ranking score used for ordering
    pub score: i64,
}

impl Rank {
    /// Create a rank entry with only a score
    pub fn with_score(score: i64) -> Self {
        Self {
            rank: 0,
            name: String::new(),
            score,
        }
    }
}

/// Validated profile statistics for one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Username as reported by the profile service
    pub username: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Clan, if the user has joined one
    #[serde(default, deserialize_with = "deserialize_clan")]
    pub clan: Option<String>,

    /// Honor points
    #[serde(default)]
    pub honor: Option<i64>,

    /// Position on the global leaderboard
    #[serde(default)]
    pub leaderboard_position: Option<i64>,

    /// Overall rank across all languages
    pub overall: Rank,

    /// Per-language ranks keyed by language id
    #[serde(default)]
    pub languages: BTreeMap<String, Rank>,
}

impl UserProfile {
    /// Create a profile with an overall score and no languages
    pub fn new(username: impl Into<String>, overall_score: i64) -> Self {
        Self {
            username: username.into(),
            name: None,
            clan: None,
            honor: None,
            leaderboard_position: None,
            overall: Rank::with_score(overall_score),
            languages: BTreeMap::new(),
        }
    }

    /// Builder-style helper to add a language score
    pub fn with_language(mut self, language: impl Into<String>, score: i64) -> Self {
        self.languages.insert(language.into(), Rank::with_score(score));
        self
    }

    /// Builder-style helper to set the clan
    pub fn with_clan(mut self, clan: impl Into<String>) -> Self {
        let clan = clan.into();
        self.clan = if clan.trim().is_empty() { None } else { Some(clan) };
        self
    }

    pub fn overall_score(&self) -> i64 {
        self.overall.score
    }

    /// Score for one language, `None` when the user has no rank in it
    pub fn language_score(&self, language: &str) -> Option<i64> {
        self.languages.get(language).map(|r| r.score)
    }

    /// Language ids this profile is ranked in
    pub fn language_keys(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }
}

/// Outcome of fetching one identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum UserRecord {
    /// Profile fetched and validated
    Success {
        identifier: String,
        profile: UserProfile,
    },

    /// Fetch failed; `message` is shown to the user verbatim
    Failure { identifier: String, message: String },
}

impl UserRecord {
    pub fn success(identifier: impl Into<String>, profile: UserProfile) -> Self {
        UserRecord::Success {
            identifier: identifier.into(),
            profile,
        }
    }

    pub fn failure(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        UserRecord::Failure {
            identifier: identifier.into(),
            message: message.into(),
        }
    }

    /// The identifier that was requested
    pub fn identifier(&self) -> &str {
        match self {
            UserRecord::Success { identifier, .. } | UserRecord::Failure { identifier, .. } => {
                identifier
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, UserRecord::Failure { .. })
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            UserRecord::Success { profile, .. } => Some(profile),
            UserRecord::Failure { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UserRecord::Success { .. } => None,
            UserRecord::Failure { message, .. } => Some(message),
        }
    }
}
