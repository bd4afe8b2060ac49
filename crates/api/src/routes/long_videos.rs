//! Long video endpoint handlers.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::info;

use domain::models::long_video::CreateLongVideoRequest;
use domain::models::{Collection, LongVideo};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{RecordId, ValidJson};
use crate::middleware::metrics::record_content_created;
use crate::routes::DeletedResponse;

/// GET /api/long-videos
pub async fn list_long_videos(
    State(state): State<AppState>,
) -> Result<Json<Vec<LongVideo>>, ApiError> {
    Ok(Json(state.content.list_long_videos().await?))
}

/// Add a long-form video by its YouTube id. Fails with 409 once the
/// collection is full.
///
/// POST /api/long-videos
pub async fn create_long_video(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateLongVideoRequest>,
) -> Result<(StatusCode, Json<LongVideo>), ApiError> {
    let video = state
        .content
        .insert_long_video(LongVideo::new(request))
        .await?;

    record_content_created(Collection::LongVideos);
    info!(
        long_video_id = %video.id,
        youtube_id = %video.youtube_id,
        "Long video created"
    );

    Ok((StatusCode::CREATED, Json(video)))
}

/// DELETE /api/long-videos/:id
pub async fn delete_long_video(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.content.delete(Collection::LongVideos, id).await?;

    info!(long_video_id = %id, "Long video deleted");

    Ok(Json(DeletedResponse::new(id)))
}
