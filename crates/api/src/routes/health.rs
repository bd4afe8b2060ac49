//! Health check endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use domain::models::Collection;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: StorageHealth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<CollectionCounts>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StorageHealth {
    pub backend: String,
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

/// Number of records held by each collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CollectionCounts {
    pub short_videos: usize,
    pub long_videos: usize,
    pub testimonials: usize,
    pub enquiries: usize,
}

/// Simple status response for liveness/readiness checks.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

async fn collection_counts(state: &AppState) -> Option<CollectionCounts> {
    let content = &state.content;
    Some(CollectionCounts {
        short_videos: content.count(Collection::ShortVideos).await.ok()?,
        long_videos: content.count(Collection::LongVideos).await.ok()?,
        testimonials: content.count(Collection::Testimonials).await.ok()?,
        enquiries: content.count(Collection::Enquiries).await.ok()?,
    })
}

/// Full health check.
///
/// GET /api/health
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let start = std::time::Instant::now();
    let connected = state.content.ping().await.is_ok();
    let latency_ms = start.elapsed().as_millis() as u64;

    let collections = if connected {
        collection_counts(&state).await
    } else {
        None
    };

    let response = HealthResponse {
        status: if connected { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: StorageHealth {
            backend: state.config.storage.backend.as_str().to_string(),
            connected,
            latency_ms: connected.then_some(latency_ms),
        },
        collections,
    };

    let status = if connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}

/// Liveness check. 200 while the process is running.
///
/// GET /api/health/live
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness check. 200 once the store answers, 503 otherwise.
///
/// GET /api/health/ready
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    state
        .content
        .ping()
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "Readiness check failed");
            ApiError::ServiceUnavailable("Storage is not ready".to_string())
        })?;

    Ok(Json(StatusResponse {
        status: "ready".to_string(),
    }))
}
