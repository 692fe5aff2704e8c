//! Post entity <-> model mapper

use pulse_core::entities::{MediaType, Post};
use pulse_core::value_objects::Snowflake;

use crate::models::PostModel;

/// Convert PostModel to Post entity
///
/// The media_type column carries a CHECK constraint, so an unknown value can
/// only appear through manual data edits; it falls back to Image.
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            media_type: MediaType::parse(&model.media_type).unwrap_or(MediaType::Image),
            content_url: model.content_url,
            category: model.category,
            like_count: model.like_count,
            created_at: model.created_at,
        }
    }
}

/// Convert Post entity reference to values for database insertion
pub struct PostInsert<'a> {
    pub id: i64,
    pub user_id: i64,
    pub media_type: &'static str,
    pub content_url: &'a str,
    pub category: Option<&'a str>,
}

impl<'a> PostInsert<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            id: post.id.into_inner(),
            user_id: post.user_id.into_inner(),
            media_type: post.media_type.as_str(),
            content_url: &post.content_url,
            category: post.category.as_deref(),
        }
    }
}
