//! Repository implementations for database operations.

pub mod admin_session;
pub mod enquiry;
pub mod long_video;
pub mod short_video;
pub mod testimonial;

pub use admin_session::AdminSessionRepository;
pub use enquiry::EnquiryRepository;
pub use long_video::LongVideoRepository;
pub use short_video::ShortVideoRepository;
pub use testimonial::TestimonialRepository;

/// Outcome of an insert into a capped table.
#[derive(Debug, Clone, PartialEq)]
pub enum CappedInsert<T> {
    Inserted(T),
    AtCapacity,
}
