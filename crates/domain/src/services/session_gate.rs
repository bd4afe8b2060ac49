//! Admin session gate.
//!
//! Exchanges the shared admin secret for an opaque bearer token and checks
//! that token on every admin-only request. Tokens are stored as SHA-256
//! digests in an injected [`SessionStore`], expire after a configurable TTL,
//! and can be revoked by logging out.

use chrono::{Duration, Utc};
use std::sync::Arc;
use thiserror::Error;

use shared::crypto::{constant_time_eq, generate_session_token, sha256_hex};

use crate::models::{AdminSession, SessionRecord};
use crate::store::{SessionStore, StoreError};

/// Session gate failures.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or missing admin token")]
    Unauthorized,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct SessionGate {
    secret_digest: String,
    ttl: Option<Duration>,
    store: Arc<dyn SessionStore>,
}

impl SessionGate {
    /// Creates a gate for `secret`. A `ttl_secs` of 0 (or one too large to
    /// represent) issues sessions that never expire.
    pub fn new(secret: &str, ttl_secs: u64, store: Arc<dyn SessionStore>) -> Self {
        let ttl = match ttl_secs {
            0 => None,
            secs => i64::try_from(secs).ok().and_then(Duration::try_seconds),
        };
        Self {
            secret_digest: sha256_hex(secret),
            ttl,
            store,
        }
    }

    /// Issues a new session if `password` matches the configured secret.
    ///
    /// Digests are compared in constant time.
    pub async fn login(&self, password: &str) -> Result<AdminSession, GateError> {
        let supplied = sha256_hex(password);
        if !constant_time_eq(supplied.as_bytes(), self.secret_digest.as_bytes()) {
            tracing::warn!("Admin login rejected");
            return Err(GateError::InvalidCredentials);
        }

        let now = Utc::now();
        let purged = self.store.purge_expired(now).await?;
        if purged > 0 {
            tracing::debug!(purged, "Purged expired admin sessions");
        }

        let token = generate_session_token();
        let record = SessionRecord {
            token_hash: sha256_hex(&token),
            issued_at: now,
            expires_at: self.ttl.and_then(|ttl| now.checked_add_signed(ttl)),
        };
        let expires_at = record.expires_at;
        self.store.insert(record).await?;

        tracing::info!(expires_at = ?expires_at, "Admin session issued");

        Ok(AdminSession {
            token,
            issued_at: now,
            expires_at,
        })
    }

    /// Resolves a presented token to its live session.
    pub async fn authorize(&self, token: &str) -> Result<SessionRecord, GateError> {
        if token.is_empty() {
            return Err(GateError::Unauthorized);
        }

        let token_hash = sha256_hex(token);
        let record = self
            .store
            .find(&token_hash)
            .await?
            .ok_or(GateError::Unauthorized)?;

        if record.is_expired_at(Utc::now()) {
            self.store.remove(&token_hash).await?;
            return Err(GateError::Unauthorized);
        }

        Ok(record)
    }

    /// Revokes the session behind `token`.
    pub async fn logout(&self, token: &str) -> Result<(), GateError> {
        if self.store.remove(&sha256_hex(token)).await? {
            tracing::info!("Admin session revoked");
            Ok(())
        } else {
            Err(GateError::Unauthorized)
        }
    }
}
