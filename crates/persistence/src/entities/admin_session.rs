//! Admin session entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::SessionRecord;

/// Database row mapping for the admin_sessions table.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSessionEntity {
    pub token_hash: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<AdminSessionEntity> for SessionRecord {
    fn from(entity: AdminSessionEntity) -> Self {
        Self {
            token_hash: entity.token_hash,
            issued_at: entity.issued_at,
            expires_at: entity.expires_at,
        }
    }
}
