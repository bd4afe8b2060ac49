//! Testimonial domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::normalize_optional;

/// Lowest stored rating.
pub const MIN_RATING: i32 = 1;
/// Highest stored rating.
pub const MAX_RATING: i32 = 5;

/// Clamps an arbitrary rating into `[MIN_RATING, MAX_RATING]`.
pub fn clamp_rating(rating: i32) -> i32 {
    rating.clamp(MIN_RATING, MAX_RATING)
}

fn default_rating() -> i32 {
    MAX_RATING
}

/// A client testimonial shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    /// Always within `[1, 5]`.
    pub rating: i32,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Testimonial {
    /// Builds a new record with a fresh id from a validated request.
    ///
    /// The rating is clamped, never rejected.
    pub fn new(request: CreateTestimonialRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            role: normalize_optional(request.role),
            content: request.content,
            rating: clamp_rating(request.rating),
            avatar_url: normalize_optional(request.avatar_url),
            created_at: Utc::now(),
        }
    }

    /// Applies the fields present in `update`.
    pub fn apply(&mut self, update: &TestimonialUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(role) = &update.role {
            self.role = Some(role.clone());
        }
        if let Some(content) = &update.content {
            self.content = content.clone();
        }
        if let Some(rating) = update.rating {
            self.rating = clamp_rating(rating);
        }
        if let Some(avatar_url) = &update.avatar_url {
            self.avatar_url = Some(avatar_url.clone());
        }
    }
}

/// Request payload for creating a testimonial.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateTestimonialRequest {
    #[serde(default)]
    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,

    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub role: Option<String>,

    #[serde(default)]
    #[validate(
        length(max = 2000, message = "must be at most 2000 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub content: String,

    #[serde(default = "default_rating")]
    pub rating: i32,

    #[validate(length(max = 2048, message = "must be at most 2048 characters"))]
    pub avatar_url: Option<String>,
}

/// Partial update of a testimonial. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct TestimonialUpdate {
    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub role: Option<String>,

    #[validate(
        length(max = 2000, message = "must be at most 2000 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub content: Option<String>,

    pub rating: Option<i32>,

    #[validate(length(max = 2048, message = "must be at most 2048 characters"))]
    pub avatar_url: Option<String>,
}

impl TestimonialUpdate {
    /// Clamps the rating and drops blank optional text so every backend
    /// applies the same update.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name,
            role: normalize_optional(self.role),
            content: self.content,
            rating: self.rating.map(clamp_rating),
            avatar_url: normalize_optional(self.avatar_url),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.role.is_none()
            && self.content.is_none()
            && self.rating.is_none()
            && self.avatar_url.is_none()
    }
}
