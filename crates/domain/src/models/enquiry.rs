//! Enquiry domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Status assigned to every freshly submitted enquiry.
pub const ENQUIRY_STATUS_NEW: &str = "new";

/// A contact-form submission. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Enquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub comment: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Enquiry {
    /// Builds a new record stamped with the current time.
    pub fn new(request: CreateEnquiryRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            contact: request.contact,
            comment: request.comment,
            status: ENQUIRY_STATUS_NEW.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Request payload for submitting an enquiry from the public site.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateEnquiryRequest {
    #[serde(default)]
    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(
        length(max = 50, message = "must be at most 50 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub contact: String,

    #[serde(default)]
    #[validate(
        length(max = 5000, message = "must be at most 5000 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub comment: String,
}

/// Acknowledgement returned to the submitter. Carries no record id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EnquiryAck {
    pub success: bool,
    pub message: String,
}

impl EnquiryAck {
    pub fn received() -> Self {
        Self {
            success: true,
            message: "Enquiry received".to_string(),
        }
    }
}
