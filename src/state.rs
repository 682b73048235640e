use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{RankedProfile, UserRecord};
use crate::ranking::{self, RankingSelector};

/// Leaderboard session state
///
/// Only changes through [`reduce`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardState {
    /// Records from the most recent fetch, in input order
    pub records: Vec<UserRecord>,

    pub selector: RankingSelector,

    /// When `records` were fetched
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Something that happened to the leaderboard
#[derive(Debug, Clone, PartialEq)]
pub enum LeaderboardEvent {
    /// A fetch completed
    Fetched(Vec<UserRecord>),
    /// The user picked another ranking
    SelectorChanged(RankingSelector),
}

/// Apply one event and return the next state
pub fn reduce(state: LeaderboardState, event: LeaderboardEvent) -> LeaderboardState {
    match event {
        LeaderboardEvent::Fetched(records) => LeaderboardState {
            records,
            selector: RankingSelector::Overall,
            fetched_at: Some(Utc::now()),
        },
        LeaderboardEvent::SelectorChanged(selector) => LeaderboardState { selector, ..state },
    }
}

impl LeaderboardState {
    pub fn categories(&self) -> Vec<String> {
        ranking::extract_categories(&self.records)
    }

    pub fn selectors(&self) -> Vec<RankingSelector> {
        ranking::available_selectors(&self.records)
    }

    /// Current ranking under the selected category
    pub fn ranked(&self) -> Vec<RankedProfile> {
        ranking::rank_by(&self.records, &self.selector)
    }

    pub fn failures(&self) -> impl Iterator<Item = &UserRecord> {
        self.records.iter().filter(|r| r.is_error())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UserProfile;

    fn fetched() -> LeaderboardState {
        reduce(
            LeaderboardState::default(),
            LeaderboardEvent::Fetched(vec![
                UserRecord::success("Abe", UserProfile::new("Abe", 1500).with_language("js", 500)),
                UserRecord::failure("ghost", "User not found: \"ghost\" (404)."),
                UserRecord::success("Dan", UserProfile::new("Dan", 2000).with_language("python", 1200)),
            ]),
        )
    }

    #[test]
    fn test_default_state() {
        let state = LeaderboardState::default();
        assert!(state.is_empty());
        assert_eq!(state.selector, RankingSelector::Overall);
        assert!(state.fetched_at.is_none());
        assert!(state.ranked().is_empty());
    }

    #[test]
    fn test_fetch_replaces_records_and_resets_selector() {
        let state = reduce(fetched(), LeaderboardEvent::SelectorChanged("js".into()));
        assert_eq!(state.selector, RankingSelector::from("js"));

        let state = reduce(
            state,
            LeaderboardEvent::Fetched(vec![UserRecord::success("Eve", UserProfile::new("Eve", 1))]),
        );
        assert_eq!(state.selector, RankingSelector::Overall);
        assert_eq!(state.records.len(), 1);
        assert!(state.fetched_at.is_some());
    }

    #[test]
    fn test_selector_change_keeps_records() {
        let before = fetched();
        let after = reduce(before.clone(), LeaderboardEvent::SelectorChanged("python".into()));

        assert_eq!(after.records, before.records);
        assert_eq!(after.fetched_at, before.fetched_at);

        let ranked = after.ranked();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].identifier, "Dan");
    }

    #[test]
    fn test_derived_views() {
        let state = fetched();
        assert_eq!(state.categories(), vec!["js", "python"]);
        assert_eq!(state.selectors().len(), 3);
        assert_eq!(state.failures().count(), 1);

        let order: Vec<String> = state.ranked().into_iter().map(|r| r.identifier).collect();
        assert_eq!(order, vec!["Dan", "Abe"]);
    }
}
