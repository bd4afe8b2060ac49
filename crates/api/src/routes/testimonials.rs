//! Testimonial endpoint handlers.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::info;

use domain::models::testimonial::CreateTestimonialRequest;
use domain::models::{Collection, Testimonial, TestimonialUpdate};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{RecordId, ValidJson};
use crate::middleware::metrics::record_content_created;
use crate::routes::DeletedResponse;

/// GET /api/testimonials
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let limit = state.config.limits.max_listed_testimonials;
    Ok(Json(state.content.list_testimonials(limit).await?))
}

/// Add a testimonial. Out-of-range ratings are clamped into 1..=5.
///
/// POST /api/testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateTestimonialRequest>,
) -> Result<(StatusCode, Json<Testimonial>), ApiError> {
    let requested_rating = request.rating;
    let testimonial = state
        .content
        .insert_testimonial(Testimonial::new(request))
        .await?;

    record_content_created(Collection::Testimonials);
    info!(
        testimonial_id = %testimonial.id,
        rating = testimonial.rating,
        clamped = requested_rating != testimonial.rating,
        "Testimonial created"
    );

    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// Partially update a testimonial.
///
/// PUT /api/testimonials/:id
pub async fn update_testimonial(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidJson(update): ValidJson<TestimonialUpdate>,
) -> Result<Json<Testimonial>, ApiError> {
    if update.is_empty() {
        return Err(ApiError::Validation(
            "At least one field must be provided".to_string(),
        ));
    }

    let testimonial = state
        .content
        .update_testimonial(id, update.normalized())
        .await?;

    info!(testimonial_id = %id, "Testimonial updated");

    Ok(Json(testimonial))
}

/// DELETE /api/testimonials/:id
pub async fn delete_testimonial(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.content.delete(Collection::Testimonials, id).await?;

    info!(testimonial_id = %id, "Testimonial deleted");

    Ok(Json(DeletedResponse::new(id)))
}
