//! User entity - represents an account on the platform

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    /// Profile picture URL, if the user has set one
    pub avatar_url: Option<String>,
    /// Cached aggregate: sum of `like_count` over all of this user's posts.
    /// Maintained by the reaction flow, never set directly by clients.
    pub total_likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            avatar_url: None,
            total_likes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the username
    pub fn set_username(&mut self, username: String) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Update the profile picture
    pub fn set_avatar_url(&mut self, avatar_url: Option<String>) {
        self.avatar_url = avatar_url;
        self.updated_at = Utc::now();
    }
}
