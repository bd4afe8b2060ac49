//! HTTP route handlers.

pub mod admin;
pub mod enquiries;
pub mod health;
pub mod long_videos;
pub mod short_videos;
pub mod testimonials;

use serde::Serialize;
use uuid::Uuid;

/// Body returned by successful deletes.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub id: Uuid,
}

impl DeletedResponse {
    pub fn new(id: Uuid) -> Self {
        Self { success: true, id }
    }
}
