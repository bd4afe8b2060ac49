//! PostgreSQL-backed store implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use domain::models::{
    Collection, Enquiry, LongVideo, SessionRecord, ShortVideo, Testimonial, TestimonialUpdate,
};
use domain::store::{ContentStore, SessionStore, StoreError, StoreResult};

use crate::repositories::{
    AdminSessionRepository, CappedInsert, EnquiryRepository, LongVideoRepository,
    ShortVideoRepository, TestimonialRepository,
};

const UNIQUE_VIOLATION: &str = "23505";

fn backend_error(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Database error");
    StoreError::Backend(err.to_string())
}

fn insert_error(err: sqlx::Error, collection: Collection, id: Uuid) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::DuplicateId { collection, id };
        }
    }
    backend_error(err)
}

fn row_count(count: i64) -> StoreResult<usize> {
    usize::try_from(count)
        .map_err(|_| StoreError::Backend(format!("row count {} out of range", count)))
}

fn cap_of(collection: Collection) -> i64 {
    collection
        .capacity()
        .and_then(|cap| i64::try_from(cap).ok())
        .unwrap_or(i64::MAX)
}

fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

/// Content store over the PostgreSQL repositories.
#[derive(Clone)]
pub struct PgContentStore {
    pool: PgPool,
    short_videos: ShortVideoRepository,
    long_videos: LongVideoRepository,
    testimonials: TestimonialRepository,
    enquiries: EnquiryRepository,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            short_videos: ShortVideoRepository::new(pool.clone()),
            long_videos: LongVideoRepository::new(pool.clone()),
            testimonials: TestimonialRepository::new(pool.clone()),
            enquiries: EnquiryRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(backend_error)
    }

    async fn list_short_videos(&self) -> StoreResult<Vec<ShortVideo>> {
        let entities = self.short_videos.find_all().await.map_err(backend_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn insert_short_video(&self, video: ShortVideo) -> StoreResult<ShortVideo> {
        let collection = Collection::ShortVideos;
        match self
            .short_videos
            .insert_capped(&video, cap_of(collection))
            .await
            .map_err(|e| insert_error(e, collection, video.id))?
        {
            CappedInsert::Inserted(entity) => Ok(entity.into()),
            CappedInsert::AtCapacity => Err(StoreError::CapacityExceeded {
                collection,
                cap: cap_of(collection) as usize,
            }),
        }
    }

    async fn list_long_videos(&self) -> StoreResult<Vec<LongVideo>> {
        let entities = self.long_videos.find_all().await.map_err(backend_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn insert_long_video(&self, video: LongVideo) -> StoreResult<LongVideo> {
        let collection = Collection::LongVideos;
        match self
            .long_videos
            .insert_capped(&video, cap_of(collection))
            .await
            .map_err(|e| insert_error(e, collection, video.id))?
        {
            CappedInsert::Inserted(entity) => Ok(entity.into()),
            CappedInsert::AtCapacity => Err(StoreError::CapacityExceeded {
                collection,
                cap: cap_of(collection) as usize,
            }),
        }
    }

    async fn list_testimonials(&self, limit: usize) -> StoreResult<Vec<Testimonial>> {
        let entities = self
            .testimonials
            .find_all(sql_limit(limit))
            .await
            .map_err(backend_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn insert_testimonial(&self, testimonial: Testimonial) -> StoreResult<Testimonial> {
        self.testimonials
            .insert(&testimonial)
            .await
            .map(Into::into)
            .map_err(|e| insert_error(e, Collection::Testimonials, testimonial.id))
    }

    async fn update_testimonial(
        &self,
        id: Uuid,
        update: TestimonialUpdate,
    ) -> StoreResult<Testimonial> {
        self.testimonials
            .update(id, &update)
            .await
            .map_err(backend_error)?
            .map(Into::into)
            .ok_or(StoreError::NotFound {
                collection: Collection::Testimonials,
                id,
            })
    }

    async fn list_enquiries(&self, limit: usize) -> StoreResult<Vec<Enquiry>> {
        let entities = self
            .enquiries
            .find_recent(sql_limit(limit))
            .await
            .map_err(backend_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn insert_enquiry(&self, enquiry: Enquiry) -> StoreResult<()> {
        self.enquiries
            .insert(&enquiry)
            .await
            .map_err(|e| insert_error(e, Collection::Enquiries, enquiry.id))
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> StoreResult<()> {
        let removed = match collection {
            Collection::ShortVideos => self.short_videos.delete(id).await,
            Collection::LongVideos => self.long_videos.delete(id).await,
            Collection::Testimonials => self.testimonials.delete(id).await,
            Collection::Enquiries => return Err(StoreError::Immutable(collection)),
        }
        .map_err(backend_error)?;

        if removed {
            Ok(())
        } else {
            Err(StoreError::NotFound { collection, id })
        }
    }

    async fn count(&self, collection: Collection) -> StoreResult<usize> {
        let count = match collection {
            Collection::ShortVideos => self.short_videos.count().await,
            Collection::LongVideos => self.long_videos.count().await,
            Collection::Testimonials => self.testimonials.count().await,
            Collection::Enquiries => self.enquiries.count().await,
        }
        .map_err(backend_error)?;
        row_count(count)
    }
}

/// Session store over the admin_sessions table.
#[derive(Clone)]
pub struct PgSessionStore {
    sessions: AdminSessionRepository,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            sessions: AdminSessionRepository::new(pool),
        }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn insert(&self, record: SessionRecord) -> StoreResult<()> {
        self.sessions.insert(&record).await.map_err(backend_error)
    }

    async fn find(&self, token_hash: &str) -> StoreResult<Option<SessionRecord>> {
        let entity = self
            .sessions
            .find_by_token_hash(token_hash)
            .await
            .map_err(backend_error)?;
        Ok(entity.map(Into::into))
    }

    async fn remove(&self, token_hash: &str) -> StoreResult<bool> {
        self.sessions.delete(token_hash).await.map_err(backend_error)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> StoreResult<u64> {
        self.sessions
            .delete_expired(now)
            .await
            .map_err(backend_error)
    }
}
