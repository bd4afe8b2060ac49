//! Long video domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::normalize_optional;

/// A long-form YouTube video shown in the public gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LongVideo {
    pub id: Uuid,
    pub title: String,
    /// YouTube reference as entered by the admin (id or full URL).
    pub youtube_id: String,
    pub order: i32,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LongVideo {
    /// Builds a new record with a fresh id from a validated request.
    pub fn new(request: CreateLongVideoRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: request.title,
            youtube_id: request.youtube_id,
            order: request.order,
            thumbnail_url: normalize_optional(request.thumbnail_url),
            created_at: Utc::now(),
        }
    }
}

/// Request payload for creating a long video.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateLongVideoRequest {
    #[serde(default)]
    #[validate(
        length(max = 200, message = "must be at most 200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(
        length(max = 2048, message = "must be at most 2048 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub youtube_id: String,

    #[serde(default)]
    pub order: i32,

    #[validate(length(max = 2048, message = "must be at most 2048 characters"))]
    pub thumbnail_url: Option<String>,
}
