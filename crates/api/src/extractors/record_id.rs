//! Record ID path extractor.

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::error::ApiError;

/// The `:id` path segment of a record route. A segment that is not a UUID
/// cannot name a stored record, so it is reported as 404.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| ApiError::NotFound(rejection.body_text()))?;

        Uuid::parse_str(&raw)
            .map(RecordId)
            .map_err(|_| ApiError::NotFound(format!("No record with id {}", raw)))
    }
}
