//! Testimonial repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use domain::models::{Testimonial, TestimonialUpdate};

use crate::entities::TestimonialEntity;
use crate::metrics::QueryTimer;

/// Repository for testimonial database operations.
#[derive(Clone)]
pub struct TestimonialRepository {
    pool: PgPool,
}

impl TestimonialRepository {
    /// Creates a new TestimonialRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Oldest first, at most `limit` rows.
    pub async fn find_all(&self, limit: i64) -> Result<Vec<TestimonialEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_testimonials");
        let result = sqlx::query_as::<_, TestimonialEntity>(
            r#"
            SELECT id, name, role, content, rating, avatar_url, created_at
            FROM testimonials
            ORDER BY created_at ASC, id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn insert(&self, testimonial: &Testimonial) -> Result<TestimonialEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_testimonial");
        let result = sqlx::query_as::<_, TestimonialEntity>(
            r#"
            INSERT INTO testimonials (id, name, role, content, rating, avatar_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, role, content, rating, avatar_url, created_at
            "#,
        )
        .bind(testimonial.id)
        .bind(&testimonial.name)
        .bind(&testimonial.role)
        .bind(&testimonial.content)
        .bind(testimonial.rating)
        .bind(&testimonial.avatar_url)
        .bind(testimonial.created_at)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Applies the present fields of `update`. Returns `None` for an unknown id.
    pub async fn update(
        &self,
        id: Uuid,
        update: &TestimonialUpdate,
    ) -> Result<Option<TestimonialEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_testimonial");
        let result = sqlx::query_as::<_, TestimonialEntity>(
            r#"
            UPDATE testimonials
            SET name = COALESCE($2, name),
                role = COALESCE($3, role),
                content = COALESCE($4, content),
                rating = COALESCE($5, rating),
                avatar_url = COALESCE($6, avatar_url)
            WHERE id = $1
            RETURNING id, name, role, content, rating, avatar_url, created_at
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.role)
        .bind(&update.content)
        .bind(update.rating)
        .bind(&update.avatar_url)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Deletes a testimonial. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_testimonial");
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_testimonials");
        let result: Result<(i64,), sqlx::Error> =
            sqlx::query_as("SELECT COUNT(*) FROM testimonials")
                .fetch_one(&self.pool)
                .await;
        timer.record();
        Ok(result?.0)
    }
}
