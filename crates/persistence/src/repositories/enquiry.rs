//! Enquiry repository for database operations.
//!
//! Enquiries are append-only: there is no update or delete here, and the
//! schema rejects both with a trigger.

use sqlx::PgPool;

use domain::models::Enquiry;

use crate::entities::EnquiryEntity;
use crate::metrics::QueryTimer;

/// Repository for enquiry database operations.
#[derive(Clone)]
pub struct EnquiryRepository {
    pool: PgPool,
}

impl EnquiryRepository {
    /// Creates a new EnquiryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Newest first, at most `limit` rows.
    pub async fn find_recent(&self, limit: i64) -> Result<Vec<EnquiryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_enquiries");
        let result = sqlx::query_as::<_, EnquiryEntity>(
            r#"
            SELECT id, name, email, contact, comment, status, created_at
            FROM enquiries
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn insert(&self, enquiry: &Enquiry) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("insert_enquiry");
        let result = sqlx::query(
            r#"
            INSERT INTO enquiries (id, name, email, contact, comment, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(enquiry.id)
        .bind(&enquiry.name)
        .bind(&enquiry.email)
        .bind(&enquiry.contact)
        .bind(&enquiry.comment)
        .bind(&enquiry.status)
        .bind(enquiry.created_at)
        .execute(&self.pool)
        .await;
        timer.record();
        result.map(|_| ())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_enquiries");
        let result: Result<(i64,), sqlx::Error> = sqlx::query_as("SELECT COUNT(*) FROM enquiries")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        Ok(result?.0)
    }
}
