//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use codewars_leaderboard::providers::ProfileProvider;
use codewars_leaderboard::{LeaderboardError, Result, UserProfile};

/// Scripted provider: known users succeed after their delay, unknown ones 404
#[derive(Default)]
pub struct FakeProvider {
    users: HashMap<String, (UserProfile, Duration)>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, profile: UserProfile, delay_ms: u64) -> Self {
        self.users.insert(
            profile.username.clone(),
            (profile, Duration::from_millis(delay_ms)),
        );
        self
    }
}

#[async_trait]
impl ProfileProvider for FakeProvider {
    async fn fetch_profile(&self, identifier: &str) -> Result<UserProfile> {
        match self.users.get(identifier) {
            Some((profile, delay)) => {
                tokio::time::sleep(*delay).await;
                Ok(profile.clone())
            }
            None => Err(LeaderboardError::HttpStatus {
                identifier: identifier.to_string(),
                status: 404,
            }),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Abe: overall 1500, js 500. Dan: overall 2000, python 1200.
pub fn abe_and_dan() -> FakeProvider {
    FakeProvider::new()
        .with_user(
            UserProfile::new("Abe", 1500)
                .with_language("js", 500)
                .with_clan("Warriors"),
            30,
        )
        .with_user(UserProfile::new("Dan", 2000).with_language("python", 1200), 5)
}
