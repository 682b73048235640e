//! # Codewars Leaderboard
//!
//! Fetches public Codewars profiles for a list of usernames and ranks them:
//! - Concurrent, order-preserving fetch with per-user error capture
//! - Per-request timeout and cancellation
//! - Overall or per-language ranking with a deterministic tie-break
//! - Explicit session state driven by events
//! - Multiple interfaces: Rust library, CLI, HTTP server with a browser page
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use codewars_leaderboard::{LeaderboardConfig, LeaderboardEngine, LeaderboardState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = LeaderboardEngine::new(LeaderboardConfig::from_env()?)?;
//!
//!     let state = engine
//!         .show_rankings(LeaderboardState::default(), "CodeYourFuture, SallyMcGrath")
//!         .await?;
//!     let state = engine.change_selector(state, "python".into());
//!
//!     for (i, ranked) in state.ranked().iter().enumerate() {
//!         println!("#{} {} - {}", i + 1, ranked.profile.username, ranked.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod providers;
pub mod ranking;
pub mod render;
pub mod state;

#[cfg(feature = "server")]
pub mod server;

// Re-export primary types
pub use config::LeaderboardConfig;
pub use core::{Rank, RankedProfile, UserProfile, UserRecord};
pub use engine::{parse_identifiers, LeaderboardEngine};
pub use error::{LeaderboardError, Result};
pub use fetcher::Fetcher;
pub use ranking::{available_selectors, extract_categories, rank_by, RankingSelector};
pub use render::LeaderboardView;
pub use state::{reduce, LeaderboardEvent, LeaderboardState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
