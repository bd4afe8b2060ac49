//! Persistence layer for the Showcase backend.
//!
//! This crate contains:
//! - Database connection management and migrations
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - PostgreSQL and in-memory implementations of the domain store traits

pub mod db;
pub mod entities;
pub mod memory;
pub mod metrics;
pub mod postgres;
pub mod repositories;

pub use memory::{MemoryContentStore, MemorySessionStore};
pub use postgres::{PgContentStore, PgSessionStore};
