//! Admin session endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use domain::models::admin_session::{LoginRequest, LoginResponse, SessionInfoResponse};
use domain::services::GateError;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AdminAuth, ValidJson};
use crate::middleware::metrics::record_admin_login;

/// Exchange the admin password for a session token.
///
/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    match state.gate.login(&request.password).await {
        Ok(session) => {
            record_admin_login("success");
            Ok(Json(session.into()))
        }
        Err(err @ GateError::InvalidCredentials) => {
            record_admin_login("invalid_credentials");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Revoke the presented session token.
///
/// POST /api/admin/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AdminAuth,
) -> Result<StatusCode, ApiError> {
    state.gate.logout(&auth.token).await?;

    info!(issued_at = %auth.session.issued_at, "Admin logged out");

    Ok(StatusCode::NO_CONTENT)
}

/// Describe the presented session.
///
/// GET /api/admin/session
pub async fn session(auth: AdminAuth) -> Json<SessionInfoResponse> {
    Json(auth.session.into())
}
