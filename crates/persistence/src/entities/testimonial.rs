//! Testimonial entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::Testimonial;

/// Database row mapping for the testimonials table.
#[derive(Debug, Clone, FromRow)]
pub struct TestimonialEntity {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    pub rating: i32,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TestimonialEntity> for Testimonial {
    fn from(entity: TestimonialEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            role: entity.role,
            content: entity.content,
            rating: entity.rating,
            avatar_url: entity.avatar_url,
            created_at: entity.created_at,
        }
    }
}
