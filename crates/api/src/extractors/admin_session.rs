//! Admin bearer-token extractor.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use domain::models::SessionRecord;

use crate::app::AppState;
use crate::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// Returns the token of an `Authorization: Bearer <token>` header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// The admin session behind the current request.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    pub token: String,
    pub session: SessionRecord,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth) = parts.extensions.get::<AdminAuth>() {
            return Ok(auth.clone());
        }

        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ApiError::Unauthorized("Invalid or missing admin token".into()))?
            .to_string();
        let session = state.gate.authorize(&token).await?;

        Ok(AdminAuth { token, session })
    }
}
