//! Post entity - a media post on the platform

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Kind of media a post references
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Database/string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Parse from the string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }
}

/// Media post
///
/// `like_count` is a signed aggregate: each like adds 1, each dislike subtracts 1,
/// so it can go negative. It is mutated only by the reaction flow inside a
/// store transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    /// Owning user; immutable after creation
    pub user_id: Snowflake,
    pub media_type: MediaType,
    /// Opaque reference to the stored content (storage is out of scope here)
    pub content_url: String,
    pub category: Option<String>,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post with a zero like count
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        media_type: MediaType,
        content_url: String,
        category: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            media_type,
            content_url,
            category,
            like_count: 0,
            created_at: Utc::now(),
        }
    }
}
