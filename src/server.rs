//! HTTP front end: the leaderboard page and its JSON API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::engine::LeaderboardEngine;
use crate::error::LeaderboardError;
use crate::ranking::RankingSelector;
use crate::render::{render_page, LeaderboardView};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<LeaderboardEngine>,
}

/// `?users=a,b&by=python`
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub users: Option<String>,
    #[serde(default)]
    pub by: Option<String>,
}

impl LeaderboardQuery {
    fn selector(&self) -> RankingSelector {
        self.by
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(RankingSelector::from)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/health", get(health_handler))
        .route("/v1/leaderboard", get(leaderboard_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Html<String> {
    let Some(users) = query.users.as_deref() else {
        return Html(render_page(None, "", None));
    };

    match state.engine.load(users, query.selector()).await {
        Ok(leaderboard) => {
            let view = LeaderboardView::from_state(&leaderboard, state.engine.config());
            Html(render_page(Some(&view), users, None))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Leaderboard page request rejected");
            Html(render_page(None, users, Some(&e.to_string())))
        }
    }
}

async fn leaderboard_handler(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardView>, AppError> {
    let users = query.users.as_deref().unwrap_or_default();
    let leaderboard = state.engine.load(users, query.selector()).await?;

    let view = LeaderboardView::from_state(&leaderboard, state.engine.config());
    tracing::info!(
        selector = %view.selector,
        rows = view.rows.len(),
        errors = view.errors.len(),
        "Leaderboard served"
    );

    Ok(Json(view))
}

// Error handling
pub struct AppError(LeaderboardError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            LeaderboardError::EmptyInput => StatusCode::BAD_REQUEST,
            LeaderboardError::Superseded => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.0.to_string();

        if status.is_client_error() {
            tracing::warn!("⚠️ Rejected: {} - {}", status, message);
        } else {
            tracing::error!("❌ Error: {} - {}", status, message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<LeaderboardError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_selector_defaults_to_overall() {
        assert_eq!(LeaderboardQuery::default().selector(), RankingSelector::Overall);

        let blank = LeaderboardQuery {
            users: None,
            by: Some("  ".to_string()),
        };
        assert_eq!(blank.selector(), RankingSelector::Overall);

        let python = LeaderboardQuery {
            users: None,
            by: Some("python".to_string()),
        };
        assert_eq!(python.selector(), RankingSelector::from("python"));
    }
}
