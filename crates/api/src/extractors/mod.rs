//! Custom Axum extractors.

pub mod admin_session;
pub mod json_body;
pub mod record_id;

pub use admin_session::{bearer_token, AdminAuth};
pub use json_body::ValidJson;
pub use record_id::RecordId;
