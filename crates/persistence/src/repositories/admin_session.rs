//! Admin session repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use domain::models::SessionRecord;

use crate::entities::AdminSessionEntity;
use crate::metrics::QueryTimer;

/// Repository for admin session database operations.
#[derive(Clone)]
pub struct AdminSessionRepository {
    pool: PgPool,
}

impl AdminSessionRepository {
    /// Creates a new AdminSessionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, record: &SessionRecord) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("insert_admin_session");
        let result = sqlx::query(
            r#"
            INSERT INTO admin_sessions (token_hash, issued_at, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&record.token_hash)
        .bind(record.issued_at)
        .bind(record.expires_at)
        .execute(&self.pool)
        .await;
        timer.record();
        result.map(|_| ())
    }

    pub async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<AdminSessionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_admin_session");
        let result = sqlx::query_as::<_, AdminSessionEntity>(
            r#"
            SELECT token_hash, issued_at, expires_at
            FROM admin_sessions
            WHERE token_hash = $1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Returns `true` if a session was removed.
    pub async fn delete(&self, token_hash: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_admin_session");
        let result = sqlx::query("DELETE FROM admin_sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }

    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_expired_admin_sessions");
        let result = sqlx::query(
            "DELETE FROM admin_sessions WHERE expires_at IS NOT NULL AND expires_at <= $1",
        )
        .bind(now)
        .execute(&self.pool)
        .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
