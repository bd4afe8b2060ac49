//! Long video entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::LongVideo;

/// Database row mapping for the long_videos table.
#[derive(Debug, Clone, FromRow)]
pub struct LongVideoEntity {
    pub id: Uuid,
    pub title: String,
    pub youtube_id: String,
    pub display_order: i32,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<LongVideoEntity> for LongVideo {
    fn from(entity: LongVideoEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            youtube_id: entity.youtube_id,
            order: entity.display_order,
            thumbnail_url: entity.thumbnail_url,
            created_at: entity.created_at,
        }
    }
}
