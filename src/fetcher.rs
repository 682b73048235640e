use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::core::{UserProfile, UserRecord};
use crate::error::{LeaderboardError, Result};
use crate::providers::ProfileProvider;

/// Concurrent profile fetcher
///
/// Issues one request per identifier, all at once, and waits for every one
/// of them to settle. A failed request becomes a [`UserRecord::Failure`];
/// `fetch_all` itself never fails and always returns one record per
/// identifier, in input order.
pub struct Fetcher {
    provider: Arc<dyn ProfileProvider>,
    request_timeout: Duration,
}

impl Fetcher {
    pub fn new(provider: Arc<dyn ProfileProvider>, request_timeout: Duration) -> Self {
        Self {
            provider,
            request_timeout,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetch every identifier concurrently.
    ///
    /// Cancelling `cancel` settles every still-pending identifier as a
    /// failure; already settled results are kept.
    pub async fn fetch_all(
        &self,
        identifiers: &[String],
        cancel: &CancellationToken,
    ) -> Vec<UserRecord> {
        let requests = identifiers.iter().map(|identifier| async move {
            match self.fetch_one(identifier, cancel).await {
                Ok(profile) => {
                    debug!(identifier = %identifier, provider = self.provider.name(), "Profile fetched");
                    UserRecord::success(identifier.clone(), profile)
                }
                Err(e) => {
                    debug!(identifier = %identifier, error = %e, "Profile fetch failed");
                    UserRecord::failure(identifier.clone(), e.to_string())
                }
            }
        });

        let records = join_all(requests).await;

        let failed = records.iter().filter(|r| r.is_error()).count();
        info!(
            requested = identifiers.len(),
            succeeded = records.len() - failed,
            failed,
            "Fetched profiles"
        );

        records
    }

    async fn fetch_one(&self, identifier: &str, cancel: &CancellationToken) -> Result<UserProfile> {
        let request = tokio::time::timeout(self.request_timeout, self.provider.fetch_profile(identifier));

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(LeaderboardError::Cancelled {
                identifier: identifier.to_string(),
            }),
            outcome = request => match outcome {
                Ok(result) => result,
                Err(_) => Err(LeaderboardError::Timeout {
                    identifier: identifier.to_string(),
                    after: self.request_timeout,
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Resolves after a per-identifier delay; "ghost" is a 404
    struct DelayedProvider;

    #[async_trait]
    impl ProfileProvider for DelayedProvider {
        async fn fetch_profile(&self, identifier: &str) -> Result<UserProfile> {
            let delay = match identifier {
                "slow" => 50,
                "hang" => 10_000,
                _ => 1,
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;

            if identifier == "ghost" {
                return Err(LeaderboardError::HttpStatus {
                    identifier: identifier.to_string(),
                    status: 404,
                });
            }
            Ok(UserProfile::new(identifier, identifier.len() as i64))
        }

        fn name(&self) -> &str {
            "delayed"
        }
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn fetcher(timeout_ms: u64) -> Fetcher {
        Fetcher::new(Arc::new(DelayedProvider), Duration::from_millis(timeout_ms))
    }

    #[tokio::test]
    async fn test_order_preserved_when_first_is_slowest() {
        let identifiers = ids(&["slow", "ghost", "fast"]);
        let records = fetcher(1_000)
            .fetch_all(&identifiers, &CancellationToken::new())
            .await;

        let got: Vec<&str> = records.iter().map(|r| r.identifier()).collect();
        assert_eq!(got, vec!["slow", "ghost", "fast"]);
        assert!(!records[0].is_error());
        assert!(records[1].is_error());
        assert!(!records[2].is_error());
    }

    #[tokio::test]
    async fn test_empty_input_resolves_empty() {
        let records = fetcher(1_000).fetch_all(&[], &CancellationToken::new()).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_hung_request_times_out() {
        let identifiers = ids(&["hang", "fast"]);
        let records = fetcher(20)
            .fetch_all(&identifiers, &CancellationToken::new())
            .await;

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].error_message(),
            Some("Request for \"hang\" timed out after 20ms.")
        );
        assert!(!records[1].is_error());
    }

    #[tokio::test]
    async fn test_cancel_settles_pending_as_failures() {
        let identifiers = ids(&["fast", "hang"]);
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            trigger.cancel();
        });

        let records = fetcher(60_000).fetch_all(&identifiers, &cancel).await;

        assert_eq!(records.len(), 2);
        assert!(!records[0].is_error());
        assert!(records[1].error_message().unwrap().contains("cancelled"));
    }
}
