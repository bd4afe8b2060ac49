//! Process-local store implementations.
//!
//! Each store keeps its state behind a single `tokio::sync::RwLock`. Writers
//! take the write guard for the whole check-then-insert step, so a video
//! collection can never exceed its cap; readers see either the state before
//! or after a write.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::models::{
    Collection, Enquiry, LongVideo, SessionRecord, ShortVideo, Testimonial, TestimonialUpdate,
};
use domain::store::{ContentStore, SessionStore, StoreError, StoreResult};

#[derive(Default)]
struct Collections {
    short_videos: Vec<ShortVideo>,
    long_videos: Vec<LongVideo>,
    testimonials: Vec<Testimonial>,
    enquiries: Vec<Enquiry>,
}

/// Records are kept in insertion order.
trait Record {
    fn id(&self) -> Uuid;
}

impl Record for ShortVideo {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for LongVideo {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Testimonial {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Enquiry {
    fn id(&self) -> Uuid {
        self.id
    }
}

fn push_checked<T: Record + Clone>(
    records: &mut Vec<T>,
    collection: Collection,
    record: T,
) -> StoreResult<T> {
    if let Some(cap) = collection.capacity() {
        if records.len() >= cap {
            return Err(StoreError::CapacityExceeded { collection, cap });
        }
    }
    let id = record.id();
    if records.iter().any(|r| r.id() == id) {
        return Err(StoreError::DuplicateId { collection, id });
    }
    records.push(record.clone());
    Ok(record)
}

fn remove_by_id<T: Record>(records: &mut Vec<T>, collection: Collection, id: Uuid) -> StoreResult<()> {
    match records.iter().position(|r| r.id() == id) {
        Some(index) => {
            records.remove(index);
            Ok(())
        }
        None => Err(StoreError::NotFound { collection, id }),
    }
}

/// In-memory content store, for development and tests.
#[derive(Default)]
pub struct MemoryContentStore {
    inner: RwLock<Collections>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_short_videos(&self) -> StoreResult<Vec<ShortVideo>> {
        let mut videos = self.inner.read().await.short_videos.clone();
        // Stable sort: equal orders keep insertion order.
        videos.sort_by_key(|v| v.order);
        Ok(videos)
    }

    async fn insert_short_video(&self, video: ShortVideo) -> StoreResult<ShortVideo> {
        let mut inner = self.inner.write().await;
        push_checked(&mut inner.short_videos, Collection::ShortVideos, video)
    }

    async fn list_long_videos(&self) -> StoreResult<Vec<LongVideo>> {
        let mut videos = self.inner.read().await.long_videos.clone();
        videos.sort_by_key(|v| v.order);
        Ok(videos)
    }

    async fn insert_long_video(&self, video: LongVideo) -> StoreResult<LongVideo> {
        let mut inner = self.inner.write().await;
        push_checked(&mut inner.long_videos, Collection::LongVideos, video)
    }

    async fn list_testimonials(&self, limit: usize) -> StoreResult<Vec<Testimonial>> {
        let inner = self.inner.read().await;
        Ok(inner.testimonials.iter().take(limit).cloned().collect())
    }

    async fn insert_testimonial(&self, testimonial: Testimonial) -> StoreResult<Testimonial> {
        let mut inner = self.inner.write().await;
        push_checked(&mut inner.testimonials, Collection::Testimonials, testimonial)
    }

    async fn update_testimonial(
        &self,
        id: Uuid,
        update: TestimonialUpdate,
    ) -> StoreResult<Testimonial> {
        let mut inner = self.inner.write().await;
        let testimonial = inner
            .testimonials
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound {
                collection: Collection::Testimonials,
                id,
            })?;
        testimonial.apply(&update);
        Ok(testimonial.clone())
    }

    async fn list_enquiries(&self, limit: usize) -> StoreResult<Vec<Enquiry>> {
        let inner = self.inner.read().await;
        Ok(inner.enquiries.iter().rev().take(limit).cloned().collect())
    }

    async fn insert_enquiry(&self, enquiry: Enquiry) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        push_checked(&mut inner.enquiries, Collection::Enquiries, enquiry).map(|_| ())
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        match collection {
            Collection::ShortVideos => remove_by_id(&mut inner.short_videos, collection, id),
            Collection::LongVideos => remove_by_id(&mut inner.long_videos, collection, id),
            Collection::Testimonials => remove_by_id(&mut inner.testimonials, collection, id),
            Collection::Enquiries => Err(StoreError::Immutable(collection)),
        }
    }

    async fn count(&self, collection: Collection) -> StoreResult<usize> {
        let inner = self.inner.read().await;
        Ok(match collection {
            Collection::ShortVideos => inner.short_videos.len(),
            Collection::LongVideos => inner.long_videos.len(),
            Collection::Testimonials => inner.testimonials.len(),
            Collection::Enquiries => inner.enquiries.len(),
        })
    }
}

/// In-memory session store. Sessions do not survive a restart.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(&self, record: SessionRecord) -> StoreResult<()> {
        self.sessions
            .write()
            .await
            .insert(record.token_hash.clone(), record);
        Ok(())
    }

    async fn find(&self, token_hash: &str) -> StoreResult<Option<SessionRecord>> {
        Ok(self.sessions.read().await.get(token_hash).cloned())
    }

    async fn remove(&self, token_hash: &str) -> StoreResult<bool> {
        Ok(self.sessions.write().await.remove(token_hash).is_some())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> StoreResult<u64> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, record| !record.is_expired_at(now));
        Ok((before - sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use domain::models::enquiry::CreateEnquiryRequest;
    use domain::models::short_video::CreateShortVideoRequest;
    use domain::models::testimonial::CreateTestimonialRequest;
    use fake::{faker::lorem::en::Sentence, Fake};
    use std::sync::Arc;

    fn reel(order: i32) -> ShortVideo {
        ShortVideo::new(CreateShortVideoRequest {
            title: format!("Reel {}", order),
            url: format!("https://example.com/r{}", order),
            order,
        })
    }

    fn testimonial(name: &str) -> Testimonial {
        Testimonial::new(CreateTestimonialRequest {
            name: name.to_string(),
            role: None,
            content: Sentence(3..8).fake(),
            rating: 5,
            avatar_url: None,
        })
    }

    fn enquiry(name: &str) -> Enquiry {
        Enquiry::new(CreateEnquiryRequest {
            name: name.to_string(),
            email: "jane@x.com".to_string(),
            contact: "555-1234".to_string(),
            comment: "Hi".to_string(),
        })
    }

    #[tokio::test]
    async fn test_insert_increases_length_by_one() {
        let store = MemoryContentStore::new();
        for i in 0..5 {
            store.insert_short_video(reel(i)).await.unwrap();
            assert_eq!(store.count(Collection::ShortVideos).await.unwrap(), (i + 1) as usize);
        }
    }

    #[tokio::test]
    async fn test_eleventh_video_rejected() {
        let store = MemoryContentStore::new();
        for order in 1..=10 {
            store.insert_short_video(reel(order)).await.unwrap();
        }

        let err = store.insert_short_video(reel(11)).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::CapacityExceeded {
                collection: Collection::ShortVideos,
                cap: 10
            }
        ));
        assert_eq!(store.count(Collection::ShortVideos).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_cap_holds_under_concurrent_inserts() {
        let store = Arc::new(MemoryContentStore::new());
        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert_short_video(reel(i)).await })
            })
            .collect();

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 10);
        assert_eq!(store.list_short_videos().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_videos_listed_by_order() {
        let store = MemoryContentStore::new();
        for order in [5, 1, 3, 3, 2] {
            store.insert_short_video(reel(order)).await.unwrap();
        }

        let orders: Vec<i32> = store
            .list_short_videos()
            .await
            .unwrap()
            .iter()
            .map(|v| v.order)
            .collect();
        assert_eq!(orders, vec![1, 2, 3, 3, 5]);
    }

    #[tokio::test]
    async fn test_equal_orders_keep_insertion_order() {
        let store = MemoryContentStore::new();
        let first = store.insert_short_video(reel(1)).await.unwrap();
        let second = store.insert_short_video(reel(1)).await.unwrap();

        let listed = store.list_short_videos().await.unwrap();
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_collection_unchanged() {
        let store = MemoryContentStore::new();
        store.insert_short_video(reel(1)).await.unwrap();
        let before = store.list_short_videos().await.unwrap();

        let missing = Uuid::new_v4();
        let err = store
            .delete(Collection::ShortVideos, missing)
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::NotFound { id, .. } if id == missing));
        assert_eq!(store.list_short_videos().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_frees_capacity() {
        let store = MemoryContentStore::new();
        let mut ids = Vec::new();
        for order in 1..=10 {
            ids.push(store.insert_short_video(reel(order)).await.unwrap().id);
        }

        store.delete(Collection::ShortVideos, ids[0]).await.unwrap();
        assert!(store.insert_short_video(reel(11)).await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let store = MemoryContentStore::new();
        let video = reel(1);
        store.insert_short_video(video.clone()).await.unwrap();

        let err = store.insert_short_video(video).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { .. }));
        assert_eq!(store.count(Collection::ShortVideos).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_testimonials_in_insertion_order_with_limit() {
        let store = MemoryContentStore::new();
        for name in ["Ana", "Ben", "Cleo"] {
            store.insert_testimonial(testimonial(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .list_testimonials(2)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Ana", "Ben"]);
    }

    #[tokio::test]
    async fn test_update_testimonial() {
        let store = MemoryContentStore::new();
        let created = store.insert_testimonial(testimonial("Ana")).await.unwrap();

        let update = TestimonialUpdate {
            role: Some("CEO".to_string()),
            rating: Some(2),
            ..Default::default()
        };
        let updated = store.update_testimonial(created.id, update).await.unwrap();

        assert_eq!(updated.role.as_deref(), Some("CEO"));
        assert_eq!(updated.rating, 2);
        assert_eq!(updated.name, "Ana");
    }

    #[tokio::test]
    async fn test_update_unknown_testimonial() {
        let store = MemoryContentStore::new();
        let err = store
            .update_testimonial(Uuid::new_v4(), TestimonialUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_enquiries_newest_first_and_immutable() {
        let store = MemoryContentStore::new();
        store.insert_enquiry(enquiry("First")).await.unwrap();
        store.insert_enquiry(enquiry("Second")).await.unwrap();

        let listed = store.list_enquiries(10).await.unwrap();
        assert_eq!(listed[0].name, "Second");
        assert_eq!(listed[1].name, "First");

        let err = store
            .delete(Collection::Enquiries, listed[0].id)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Immutable(Collection::Enquiries)));
        assert_eq!(store.count(Collection::Enquiries).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_session_store_roundtrip_and_purge() {
        let store = MemorySessionStore::new();
        let now = Utc::now();
        store
            .insert(SessionRecord {
                token_hash: "live".to_string(),
                issued_at: now,
                expires_at: Some(now + Duration::hours(1)),
            })
            .await
            .unwrap();
        store
            .insert(SessionRecord {
                token_hash: "stale".to_string(),
                issued_at: now - Duration::hours(2),
                expires_at: Some(now - Duration::hours(1)),
            })
            .await
            .unwrap();

        assert_eq!(store.purge_expired(now).await.unwrap(), 1);
        assert!(store.find("live").await.unwrap().is_some());
        assert!(store.find("stale").await.unwrap().is_none());
        assert!(store.remove("live").await.unwrap());
        assert!(!store.remove("live").await.unwrap());
    }
}
