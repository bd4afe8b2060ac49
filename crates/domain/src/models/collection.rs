//! Content collections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of records held by each video collection.
pub const VIDEO_COLLECTION_CAP: usize = 10;

/// One of the four record sets served by the content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    ShortVideos,
    LongVideos,
    Testimonials,
    Enquiries,
}

impl Collection {
    /// Storage name of the collection (also the SQL table name).
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::ShortVideos => "short_videos",
            Collection::LongVideos => "long_videos",
            Collection::Testimonials => "testimonials",
            Collection::Enquiries => "enquiries",
        }
    }

    /// Maximum number of records the collection may hold, if capped.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Collection::ShortVideos | Collection::LongVideos => Some(VIDEO_COLLECTION_CAP),
            Collection::Testimonials | Collection::Enquiries => None,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
