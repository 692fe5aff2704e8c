//! Comment entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub post_id: Snowflake,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(id: Snowflake, user_id: Snowflake, post_id: Snowflake, text: String) -> Self {
        Self {
            id,
            user_id,
            post_id,
            text,
            created_at: Utc::now(),
        }
    }
}
