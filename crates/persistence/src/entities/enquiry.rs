//! Enquiry entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::Enquiry;

/// Database row mapping for the enquiries table.
#[derive(Debug, Clone, FromRow)]
pub struct EnquiryEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub comment: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<EnquiryEntity> for Enquiry {
    fn from(entity: EnquiryEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            contact: entity.contact,
            comment: entity.comment,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}
