use crate::config::LeaderboardConfig;
use crate::error::{LeaderboardError, Result};
use crate::fetcher::Fetcher;
use crate::providers::{CodewarsProvider, ProfileProvider};
use crate::ranking::RankingSelector;
use crate::state::{reduce, LeaderboardEvent, LeaderboardState};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Main leaderboard orchestrator
///
/// Turns user actions into state transitions. Starting a fetch cancels the
/// one still in flight, so the most recently triggered fetch wins.
pub struct LeaderboardEngine {
    fetcher: Fetcher,
    config: LeaderboardConfig,
    in_flight: Mutex<Option<CancellationToken>>,
}

/// Split comma-separated input into identifiers.
///
/// Entries are trimmed and blanks dropped; nothing left is an error.
pub fn parse_identifiers(input: &str) -> Result<Vec<String>> {
    let identifiers: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if identifiers.is_empty() {
        return Err(LeaderboardError::EmptyInput);
    }
    Ok(identifiers)
}

impl LeaderboardEngine {
    /// Create engine backed by the Codewars API
    pub fn new(config: LeaderboardConfig) -> Result<Self> {
        let provider = Arc::new(CodewarsProvider::new(&config)?);
        Ok(Self::with_provider(provider, config))
    }

    /// Create engine with a custom profile provider
    pub fn with_provider(provider: Arc<dyn ProfileProvider>, config: LeaderboardConfig) -> Self {
        let fetcher = Fetcher::new(provider, config.request_timeout());
        Self {
            fetcher,
            config,
            in_flight: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &LeaderboardConfig {
        &self.config
    }

    /// Handle the "show rankings" action.
    ///
    /// Returns [`LeaderboardError::EmptyInput`] before any request when the
    /// input has no identifiers, and [`LeaderboardError::Superseded`] when a
    /// newer fetch started, or `cancel_in_flight` ran, while this one was running.
    pub async fn show_rankings(&self, state: LeaderboardState, input: &str) -> Result<LeaderboardState> {
        let identifiers = parse_identifiers(input)?;
        let start = Instant::now();

        let cancel = self.begin_fetch().await;
        let records = self.fetcher.fetch_all(&identifiers, &cancel).await;

        if !self.finish_fetch(&cancel).await {
            tracing::debug!(requested = identifiers.len(), "Discarding superseded fetch");
            return Err(LeaderboardError::Superseded);
        }

        tracing::info!(
            provider = self.fetcher.provider_name(),
            users = identifiers.len(),
            latency_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Leaderboard refreshed"
        );

        Ok(reduce(state, LeaderboardEvent::Fetched(records)))
    }

    /// Fetch and rank in one step, outside the in-flight tracking.
    ///
    /// For request/response callers where concurrent calls belong to
    /// different users and must not cancel each other.
    pub async fn load(&self, input: &str, selector: RankingSelector) -> Result<LeaderboardState> {
        let identifiers = parse_identifiers(input)?;
        let records = self
            .fetcher
            .fetch_all(&identifiers, &CancellationToken::new())
            .await;

        let state = reduce(LeaderboardState::default(), LeaderboardEvent::Fetched(records));
        Ok(reduce(state, LeaderboardEvent::SelectorChanged(selector)))
    }

    /// Handle the "change selector" action
    pub fn change_selector(&self, state: LeaderboardState, selector: RankingSelector) -> LeaderboardState {
        tracing::debug!(selector = %selector, "Ranking selector changed");
        reduce(state, LeaderboardEvent::SelectorChanged(selector))
    }

    /// Cancel the fetch in flight, if any
    pub async fn cancel_in_flight(&self) {
        if let Some(token) = self.in_flight.lock().await.take() {
            token.cancel();
        }
    }

    async fn begin_fetch(&self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.in_flight.lock().await.replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    /// Release the in-flight slot; `false` if this fetch was cancelled.
    ///
    /// `begin_fetch` cancels under the same lock, so an uncancelled token
    /// still owns the slot.
    async fn finish_fetch(&self, token: &CancellationToken) -> bool {
        let mut in_flight = self.in_flight.lock().await;
        if token.is_cancelled() {
            return false;
        }
        *in_flight = None;
        true
    }
}
