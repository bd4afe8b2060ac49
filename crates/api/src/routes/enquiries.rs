//! Enquiry endpoint handlers.

use axum::{extract::State, Json};
use tracing::info;

use domain::models::enquiry::{CreateEnquiryRequest, EnquiryAck};
use domain::models::{Collection, Enquiry};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::middleware::metrics::record_content_created;

/// Submit a contact-form enquiry. The response never exposes the record id.
///
/// POST /api/enquiries
pub async fn create_enquiry(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateEnquiryRequest>,
) -> Result<Json<EnquiryAck>, ApiError> {
    let enquiry = Enquiry::new(request);
    let enquiry_id = enquiry.id;
    state.content.insert_enquiry(enquiry).await?;

    record_content_created(Collection::Enquiries);
    info!(enquiry_id = %enquiry_id, "Enquiry received");

    Ok(Json(EnquiryAck::received()))
}

/// List enquiries, newest first.
///
/// GET /api/enquiries
pub async fn list_enquiries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Enquiry>>, ApiError> {
    let limit = state.config.limits.max_listed_enquiries;
    Ok(Json(state.content.list_enquiries(limit).await?))
}
