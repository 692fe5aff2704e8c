//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for post_reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
    pub is_like: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
