//! Presentation of a [`LeaderboardState`]: a serializable view model plus
//! text (CLI) and HTML (browser) renderers.

pub mod html;
pub mod text;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::LeaderboardConfig;
use crate::ranking::RankingSelector;
use crate::state::LeaderboardState;

pub use html::render_page;
pub use text::render_table;

pub const NO_DATA_MESSAGE: &str = "No users found for this ranking.";
pub const NO_CLAN: &str = "N/A";

/// Medal for the first three places
pub fn medal(position: usize) -> Option<&'static str> {
    match position {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

/// One choice of the category control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    /// 1-based position
    pub position: usize,
    pub medal: Option<&'static str>,
    pub identifier: String,
    pub username: String,
    pub clan: String,
    pub rank_name: String,
    pub score: i64,
    pub profile_url: String,
}

/// Everything needed to draw the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub selector: RankingSelector,
    pub options: Vec<SelectorOption>,
    pub rows: Vec<LeaderboardRow>,
    /// Failure messages, shown verbatim
    pub errors: Vec<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl LeaderboardView {
    /// Build the view for the current selector.
    ///
    /// A selector no user has is still listed, selected, after the known
    /// categories, so the control always shows what the rows are ranked by.
    pub fn from_state(state: &LeaderboardState, config: &LeaderboardConfig) -> Self {
        let mut selectors = state.selectors();
        if !selectors.contains(&state.selector) {
            selectors.push(state.selector.clone());
        }

        let options = selectors
            .into_iter()
            .map(|selector| SelectorOption {
                value: selector.to_string(),
                label: selector.label(),
                selected: selector == state.selector,
            })
            .collect();

        let language = state.selector.language();
        let rows = state
            .ranked()
            .into_iter()
            .enumerate()
            .map(|(index, ranked)| {
                let position = index + 1;
                LeaderboardRow {
                    position,
                    medal: medal(position),
                    rank_name: ranked.rank_name(language).to_string(),
                    profile_url: config.profile_url(&ranked.identifier),
                    clan: ranked.profile.clan.clone().unwrap_or_else(|| NO_CLAN.to_string()),
                    username: ranked.profile.username,
                    identifier: ranked.identifier,
                    score: ranked.score,
                }
            })
            .collect();

        let errors = state
            .failures()
            .filter_map(|r| r.error_message())
            .map(str::to_string)
            .collect();

        Self {
            selector: state.selector.clone(),
            options,
            rows,
            errors,
            fetched_at: state.fetched_at,
        }
    }

    /// No rows under the current selector
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
