//! Long video repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use domain::models::LongVideo;

use super::CappedInsert;
use crate::entities::LongVideoEntity;
use crate::metrics::QueryTimer;

/// Repository for long-video database operations.
#[derive(Clone)]
pub struct LongVideoRepository {
    pool: PgPool,
}

impl LongVideoRepository {
    /// Creates a new LongVideoRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All long videos in display order.
    pub async fn find_all(&self) -> Result<Vec<LongVideoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_long_videos");
        let result = sqlx::query_as::<_, LongVideoEntity>(
            r#"
            SELECT id, title, youtube_id, display_order, thumbnail_url, created_at
            FROM long_videos
            ORDER BY display_order ASC, created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Inserts a long video unless the table already holds `cap` rows.
    /// Same locking scheme as the short-video table.
    pub async fn insert_capped(
        &self,
        video: &LongVideo,
        cap: i64,
    ) -> Result<CappedInsert<LongVideoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("insert_long_video");
        let mut tx = self.pool.begin().await?;

        sqlx::query("LOCK TABLE long_videos IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM long_videos")
            .fetch_one(&mut *tx)
            .await?;
        if count >= cap {
            tx.rollback().await?;
            timer.record();
            return Ok(CappedInsert::AtCapacity);
        }

        let entity = sqlx::query_as::<_, LongVideoEntity>(
            r#"
            INSERT INTO long_videos (id, title, youtube_id, display_order, thumbnail_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, youtube_id, display_order, thumbnail_url, created_at
            "#,
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.youtube_id)
        .bind(video.order)
        .bind(&video.thumbnail_url)
        .bind(video.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(CappedInsert::Inserted(entity))
    }

    /// Deletes a long video. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_long_video");
        let result = sqlx::query("DELETE FROM long_videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_long_videos");
        let result: Result<(i64,), sqlx::Error> =
            sqlx::query_as("SELECT COUNT(*) FROM long_videos")
                .fetch_one(&self.pool)
                .await;
        timer.record();
        Ok(result?.0)
    }
}
