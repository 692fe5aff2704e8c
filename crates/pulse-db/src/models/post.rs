//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub user_id: i64,
    pub media_type: String,
    pub content_url: String,
    pub category: Option<String>,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}
