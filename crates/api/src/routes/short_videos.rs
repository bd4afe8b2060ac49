//! Short video endpoint handlers.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::info;

use domain::models::short_video::CreateShortVideoRequest;
use domain::models::{Collection, ShortVideo};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{RecordId, ValidJson};
use crate::middleware::metrics::record_content_created;
use crate::routes::DeletedResponse;

/// List short videos in display order.
///
/// GET /api/short-videos
pub async fn list_short_videos(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShortVideo>>, ApiError> {
    Ok(Json(state.content.list_short_videos().await?))
}

/// Add a short video. Fails with 409 once the collection is full.
///
/// POST /api/short-videos
pub async fn create_short_video(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateShortVideoRequest>,
) -> Result<(StatusCode, Json<ShortVideo>), ApiError> {
    let video = state
        .content
        .insert_short_video(ShortVideo::new(request))
        .await?;

    record_content_created(Collection::ShortVideos);
    info!(
        short_video_id = %video.id,
        order = video.order,
        "Short video created"
    );

    Ok((StatusCode::CREATED, Json(video)))
}

/// DELETE /api/short-videos/:id
pub async fn delete_short_video(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.content.delete(Collection::ShortVideos, id).await?;

    info!(short_video_id = %id, "Short video deleted");

    Ok(Json(DeletedResponse::new(id)))
}
