//! Poll database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Poll row joined with the owner's username
#[derive(Debug, Clone, FromRow)]
pub struct PollWithOwnerModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
}

/// Database model for poll_options table
#[derive(Debug, Clone, FromRow)]
pub struct PollOptionModel {
    pub id: i64,
    pub poll_id: i64,
    pub text: String,
    pub vote_count: i64,
    pub position: i32,
}

