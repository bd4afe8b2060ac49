//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod admin_session;
pub mod enquiry;
pub mod long_video;
pub mod short_video;
pub mod testimonial;

pub use admin_session::AdminSessionEntity;
pub use enquiry::EnquiryEntity;
pub use long_video::LongVideoEntity;
pub use short_video::ShortVideoEntity;
pub use testimonial::TestimonialEntity;
