//! Short video domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A short-form reel shown in the public gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ShortVideo {
    pub id: Uuid,
    pub title: String,
    /// External video link. Opaque to the backend.
    pub url: String,
    /// Display position, ascending.
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

impl ShortVideo {
    /// Builds a new record with a fresh id from a validated request.
    pub fn new(request: CreateShortVideoRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: request.title,
            url: request.url,
            order: request.order,
            created_at: Utc::now(),
        }
    }
}

/// Request payload for creating a short video.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateShortVideoRequest {
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
    pub url: String,

    #[serde(default)]
    pub order: i32,
}
