//! Short video entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::ShortVideo;

/// Database row mapping for the short_videos table.
#[derive(Debug, Clone, FromRow)]
pub struct ShortVideoEntity {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ShortVideoEntity> for ShortVideo {
    fn from(entity: ShortVideoEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            url: entity.url,
            order: entity.display_order,
            created_at: entity.created_at,
        }
    }
}
