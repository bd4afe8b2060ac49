//! Admin session models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// A freshly issued admin session. The plaintext token exists only here;
/// stores keep its digest.
#[derive(Clone, PartialEq)]
pub struct AdminSession {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSession")
            .field("token", &"<redacted>")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Stored form of a session, keyed by the SHA-256 digest of its token.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub token_hash: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionRecord {
    /// Sessions without an expiry never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// Login request payload.
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<AdminSession> for LoginResponse {
    fn from(session: AdminSession) -> Self {
        Self {
            success: true,
            token: session.token,
            expires_at: session.expires_at,
        }
    }
}

/// Details of the session presented on an admin request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionInfoResponse {
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<SessionRecord> for SessionInfoResponse {
    fn from(record: SessionRecord) -> Self {
        Self {
            issued_at: record.issued_at,
            expires_at: record.expires_at,
        }
    }
}
