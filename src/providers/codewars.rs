use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::LeaderboardConfig;
use crate::core::{Rank, UserProfile};
use crate::providers::ProfileProvider;
use crate::error::{LeaderboardError, Result};

/// Codewars public users API provider
pub struct CodewarsProvider {
    client: Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CodewarsUser {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    clan: Option<String>,
    #[serde(default)]
    honor: Option<i64>,
    #[serde(default)]
    leaderboard_position: Option<i64>,
    ranks: CodewarsRanks,
}

#[derive(Debug, Deserialize)]
struct CodewarsRanks {
    overall: CodewarsRank,
    #[serde(default)]
    languages: BTreeMap<String, CodewarsRank>,
}

#[derive(Debug, Deserialize)]
struct CodewarsRank {
    #[serde(default)]
    rank: i32,
    #[serde(default)]
    name: String,
    score: i64,
}

impl From<CodewarsRank> for Rank {
    fn from(r: CodewarsRank) -> Self {
        Rank {
            rank: r.rank,
            name: r.name,
            score: r.score,
        }
    }
}

impl CodewarsProvider {
    /// Create provider from configuration
    pub fn new(config: &LeaderboardConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            timeout: config.request_timeout(),
        })
    }

    /// Endpoint for one identifier
    pub fn profile_endpoint(&self, identifier: &str) -> String {
        format!("{}{}", self.base_url, urlencoding::encode(identifier))
    }

    fn transport_error(&self, identifier: &str, e: reqwest::Error) -> LeaderboardError {
        if e.is_timeout() {
            LeaderboardError::Timeout {
                identifier: identifier.to_string(),
                after: self.timeout,
            }
        } else {
            LeaderboardError::Transport {
                identifier: identifier.to_string(),
                message: e.to_string(),
            }
        }
    }
}

/// Validate a profile body against the expected schema.
///
/// A missing `username` falls back to the requested identifier.
pub fn parse_profile(identifier: &str, body: &[u8]) -> Result<UserProfile> {
    let user: CodewarsUser =
        serde_json::from_slice(body).map_err(|e| LeaderboardError::Malformed {
            identifier: identifier.to_string(),
            message: e.to_string(),
        })?;

    let clan = user.clan.filter(|c| !c.trim().is_empty());

    Ok(UserProfile {
        username: user.username.unwrap_or_else(|| identifier.to_string()),
        name: user.name,
        clan,
        honor: user.honor,
        leaderboard_position: user.leaderboard_position,
        overall: user.ranks.overall.into(),
        languages: user
            .ranks
            .languages
            .into_iter()
            .map(|(lang, rank)| (lang, rank.into()))
            .collect(),
    })
}

#[async_trait]
impl ProfileProvider for CodewarsProvider {
    async fn fetch_profile(&self, identifier: &str) -> Result<UserProfile> {
        let url = self.profile_endpoint(identifier);
        tracing::trace!(identifier, url = %url, "Requesting profile");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(identifier, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeaderboardError::HttpStatus {
                identifier: identifier.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(identifier, e))?;

        parse_profile(identifier, &body)
    }

    fn name(&self) -> &str {
        "codewars"
    }
}
