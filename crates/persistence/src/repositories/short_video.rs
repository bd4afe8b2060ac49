//! Short video repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use domain::models::ShortVideo;

use super::CappedInsert;
use crate::entities::ShortVideoEntity;
use crate::metrics::QueryTimer;

/// Repository for short-video database operations.
#[derive(Clone)]
pub struct ShortVideoRepository {
    pool: PgPool,
}

impl ShortVideoRepository {
    /// Creates a new ShortVideoRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All short videos in display order.
    pub async fn find_all(&self) -> Result<Vec<ShortVideoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_short_videos");
        let result = sqlx::query_as::<_, ShortVideoEntity>(
            r#"
            SELECT id, title, url, display_order, created_at
            FROM short_videos
            ORDER BY display_order ASC, created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Inserts a short video unless the table already holds `cap` rows.
    ///
    /// The table lock is held until commit; the mode conflicts with itself
    /// but not with plain reads, so concurrent inserts are serialized while
    /// listings keep running.
    pub async fn insert_capped(
        &self,
        video: &ShortVideo,
        cap: i64,
    ) -> Result<CappedInsert<ShortVideoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("insert_short_video");
        let mut tx = self.pool.begin().await?;

        sqlx::query("LOCK TABLE short_videos IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM short_videos")
            .fetch_one(&mut *tx)
            .await?;
        if count >= cap {
            tx.rollback().await?;
            timer.record();
            return Ok(CappedInsert::AtCapacity);
        }

        let entity = sqlx::query_as::<_, ShortVideoEntity>(
            r#"
            INSERT INTO short_videos (id, title, url, display_order, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, url, display_order, created_at
            "#,
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.url)
        .bind(video.order)
        .bind(video.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(CappedInsert::Inserted(entity))
    }

    /// Deletes a short video. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_short_video");
        let result = sqlx::query("DELETE FROM short_videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_short_videos");
        let result: Result<(i64,), sqlx::Error> =
            sqlx::query_as("SELECT COUNT(*) FROM short_videos")
                .fetch_one(&self.pool)
                .await;
        timer.record();
        Ok(result?.0)
    }
}
