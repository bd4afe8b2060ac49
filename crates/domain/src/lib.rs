//! Domain layer for the Showcase backend.
//!
//! This crate contains:
//! - Domain models (videos, testimonials, enquiries, admin sessions)
//! - Storage traits implemented by the persistence layer
//! - The admin session gate

pub mod models;
pub mod services;
pub mod store;
