pub mod categories;
pub mod score;

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub use categories::{available_selectors, extract_categories};
pub use score::rank_by;

/// Sentinel selector value for the overall ranking
pub const OVERALL: &str = "overall";

/// Which score a leaderboard is ordered by
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RankingSelector {
    /// Overall rank across all languages
    #[default]
    Overall,
    /// Rank in a single language
    Language(String),
}

impl RankingSelector {
    /// Language key, `None` for overall
    pub fn language(&self) -> Option<&str> {
        match self {
            RankingSelector::Overall => None,
            RankingSelector::Language(lang) => Some(lang),
        }
    }

    pub fn as_str(&self) -> &str {
        self.language().unwrap_or(OVERALL)
    }

    /// Capitalised label for display, e.g. "Python"
    pub fn label(&self) -> String {
        let mut chars = self.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<&str> for RankingSelector {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s == OVERALL {
            RankingSelector::Overall
        } else {
            RankingSelector::Language(s.to_string())
        }
    }
}

impl From<String> for RankingSelector {
    fn from(s: String) -> Self {
        RankingSelector::from(s.as_str())
    }
}

impl From<RankingSelector> for String {
    fn from(selector: RankingSelector) -> Self {
        selector.as_str().to_string()
    }
}

impl FromStr for RankingSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RankingSelector::from(s))
    }
}

impl fmt::Display for RankingSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        assert_eq!(RankingSelector::from("overall"), RankingSelector::Overall);
        assert_eq!(
            RankingSelector::from(" java "),
            RankingSelector::Language("java".to_string())
        );
        assert_eq!("python".parse::<RankingSelector>().unwrap().as_str(), "python");
    }

    #[test]
    fn test_selector_labels() {
        assert_eq!(RankingSelector::Overall.label(), "Overall");
        assert_eq!(RankingSelector::from("javascript").label(), "Javascript");
        assert_eq!(RankingSelector::from("c++").to_string(), "c++");
    }

    #[test]
    fn test_selector_serde_as_string() {
        let json = serde_json::to_string(&RankingSelector::from("rust")).unwrap();
        assert_eq!(json, "\"rust\"");

        let back: RankingSelector = serde_json::from_str("\"overall\"").unwrap();
        assert_eq!(back, RankingSelector::Overall);
    }
}
