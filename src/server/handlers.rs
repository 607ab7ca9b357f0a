// HTTP request handlers.
// Maps cache and aggregation results onto JSON responses.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::FolioError;
use crate::projects::{self, Project};
use crate::stats;

use super::state::AppState;

/// Body of every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub timestamp: i64,
    pub updates: u64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// `GET /api/git`: cached statistics, recomputed once the cache expires.
///
/// A recompute runs on its own task, so it completes and publishes even if
/// the requesting client goes away.
pub async fn git_stats(State(state): State<Arc<AppState>>) -> Response {
    let now = Utc::now();
    if let Some(entry) = state.cache.fresh(now) {
        return (StatusCode::OK, Json(entry.as_ref())).into_response();
    }

    let refresher = Arc::clone(&state);
    let task = tokio::spawn(async move {
        refresher
            .cache
            .get_or_refresh(now, || {
                stats::aggregate(&refresher.client, &refresher.user, now)
            })
            .await
    });

    let (source, updates) = match task.await {
        Ok(Ok(entry)) => return (StatusCode::OK, Json(entry.as_ref())).into_response(),
        Ok(Err(err)) => (err.source, err.updates),
        Err(join_err) => (
            FolioError::Other(format!("refresh task failed: {}", join_err)),
            state.cache.attempts(),
        ),
    };

    let (status, message) = match source {
        FolioError::Upstream { context, status } => (status, context.to_string()),
        other => {
            error!(error = %other, "Error fetching GitHub user or repositories");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            )
        }
    };

    let body = ErrorBody {
        error: message,
        timestamp: now.timestamp_millis(),
        updates,
    };
    (status, Json(body)).into_response()
}

/// `GET /api/projects`
pub async fn list_projects() -> Json<Vec<Project>> {
    Json(projects::featured())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
}
