//! Domain models for Showcase.

pub mod admin_session;
pub mod collection;
pub mod enquiry;
pub mod long_video;
pub mod short_video;
pub mod testimonial;

pub use admin_session::{AdminSession, SessionRecord};
pub use collection::{Collection, VIDEO_COLLECTION_CAP};
pub use enquiry::Enquiry;
pub use long_video::LongVideo;
pub use short_video::ShortVideo;
pub use testimonial::{Testimonial, TestimonialUpdate};

use validator::ValidationErrors;

/// Treats blank optional text as absent.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Flattens validator errors into `field: message` pairs joined by commas.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: invalid value", field),
            })
        })
        .collect();
    parts.sort();
    parts.join(", ")
}
