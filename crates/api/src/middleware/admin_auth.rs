//! Admin session guard.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::admin_session::{bearer_token, AdminAuth};

/// Rejects requests without a live admin session and stores the resolved
/// [`AdminAuth`] in request extensions for handlers.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(req.headers()).map(str::to_string) else {
        return ApiError::Unauthorized("Invalid or missing admin token".into()).into_response();
    };

    match state.gate.authorize(&token).await {
        Ok(session) => {
            req.extensions_mut().insert(AdminAuth { token, session });
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(path = %req.uri().path(), "Admin token rejected");
            ApiError::from(err).into_response()
        }
    }
}
