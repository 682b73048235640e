use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codewars_leaderboard::config::DEFAULT_LOG_FILTER;
use codewars_leaderboard::server::{create_router, AppState};
use codewars_leaderboard::{LeaderboardConfig, LeaderboardEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("leaderboard_server=debug,{DEFAULT_LOG_FILTER},tower_http=info").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = LeaderboardConfig::from_env()?;
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);

    tracing::info!("🚀 Starting Codewars Leaderboard Server");
    tracing::info!("🌐 Profile API: {}", config.api_base_url);
    tracing::info!("⏱️ Request timeout: {}s", config.request_timeout_secs);

    let engine = LeaderboardEngine::new(config)?;
    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🏆 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
