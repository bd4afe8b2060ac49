//! Storage abstractions implemented by the persistence layer.
//!
//! Handlers and the session gate only see these traits, so the backing store
//! (PostgreSQL or process memory) can be swapped without touching them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    Collection, Enquiry, LongVideo, SessionRecord, ShortVideo, Testimonial, TestimonialUpdate,
};

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{collection} is at capacity ({cap} records)")]
    CapacityExceeded { collection: Collection, cap: usize },

    #[error("{collection} record {id} not found")]
    NotFound { collection: Collection, id: Uuid },

    #[error("{0} records cannot be deleted")]
    Immutable(Collection),

    #[error("{collection} record {id} already exists")]
    DuplicateId { collection: Collection, id: Uuid },

    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for the four content collections.
///
/// Implementations must make the capacity check and the insert of a capped
/// collection one atomic step, and must never persist part of a write.
#[async_trait]
pub trait ContentStore: Send + Sync + 'static {
    /// Checks that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Short videos ordered by `order` ascending.
    async fn list_short_videos(&self) -> StoreResult<Vec<ShortVideo>>;

    /// Fails with [`StoreError::CapacityExceeded`] when the collection is full.
    async fn insert_short_video(&self, video: ShortVideo) -> StoreResult<ShortVideo>;

    /// Long videos ordered by `order` ascending.
    async fn list_long_videos(&self) -> StoreResult<Vec<LongVideo>>;

    /// Fails with [`StoreError::CapacityExceeded`] when the collection is full.
    async fn insert_long_video(&self, video: LongVideo) -> StoreResult<LongVideo>;

    /// Testimonials in insertion order, at most `limit`.
    async fn list_testimonials(&self, limit: usize) -> StoreResult<Vec<Testimonial>>;

    async fn insert_testimonial(&self, testimonial: Testimonial) -> StoreResult<Testimonial>;

    /// Applies a normalized partial update and returns the stored result.
    async fn update_testimonial(
        &self,
        id: Uuid,
        update: TestimonialUpdate,
    ) -> StoreResult<Testimonial>;

    /// Enquiries newest first, at most `limit`.
    async fn list_enquiries(&self, limit: usize) -> StoreResult<Vec<Enquiry>>;

    async fn insert_enquiry(&self, enquiry: Enquiry) -> StoreResult<()>;

    /// Removes a record. Unknown ids fail with [`StoreError::NotFound`].
    async fn delete(&self, collection: Collection, id: Uuid) -> StoreResult<()>;

    /// Number of records currently held by a collection.
    async fn count(&self, collection: Collection) -> StoreResult<usize>;
}

/// Persistence for issued admin sessions, keyed by token digest.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    async fn insert(&self, record: SessionRecord) -> StoreResult<()>;

    async fn find(&self, token_hash: &str) -> StoreResult<Option<SessionRecord>>;

    /// Returns `true` if a session was removed.
    async fn remove(&self, token_hash: &str) -> StoreResult<bool>;

    /// Drops every session expired at `now`; returns how many were dropped.
    async fn purge_expired(&self, now: DateTime<Utc>) -> StoreResult<u64>;
}
