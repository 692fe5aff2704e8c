//! Post service
//!
//! Post creation and feed queries.

use pulse_core::entities::{MediaType, Post};
use pulse_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreatePostRequest, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default page size for feed queries
const DEFAULT_FEED_LIMIT: i64 = 50;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new post
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        user_id: Snowflake,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let media_type = MediaType::parse(&request.media_type)
            .ok_or_else(|| ServiceError::validation("media_type must be 'image' or 'video'"))?;

        let post = Post {
            id: self.ctx.generate_id(),
            user_id,
            media_type,
            content_url: request.content_url,
            category: request.category,
            like_count: 0,
            created_at: chrono::Utc::now(),
        };

        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, user_id = %user_id, "Post created");

        Ok(PostResponse::from(&post))
    }

    /// Get a single post
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Snowflake) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        Ok(PostResponse::from(&post))
    }

    /// List the current user's own posts
    #[instrument(skip(self))]
    pub async fn list_own_posts(&self, user_id: Snowflake) -> ServiceResult<Vec<PostResponse>> {
        let posts = self
            .ctx
            .post_repo()
            .find_by_author(user_id, DEFAULT_FEED_LIMIT)
            .await?;

        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// List other users' posts for the explore feed
    #[instrument(skip(self))]
    pub async fn list_explore_posts(&self, user_id: Snowflake) -> ServiceResult<Vec<PostResponse>> {
        let posts = self
            .ctx
            .post_repo()
            .find_explore(user_id, DEFAULT_FEED_LIMIT)
            .await?;

        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// Bookmark a post for the current user
    #[instrument(skip(self))]
    pub async fn save_post(&self, user_id: Snowflake, post_id: Snowflake) -> ServiceResult<()> {
        let save_id = self.ctx.generate_id();
        self.ctx
            .post_repo()
            .save_for_user(save_id, user_id, post_id)
            .await?;

        info!(post_id = %post_id, user_id = %user_id, "Post saved");

        Ok(())
    }

    /// List the current user's saved posts
    #[instrument(skip(self))]
    pub async fn list_saved_posts(&self, user_id: Snowflake) -> ServiceResult<Vec<PostResponse>> {
        let posts = self
            .ctx
            .post_repo()
            .find_saved(user_id, DEFAULT_FEED_LIMIT)
            .await?;

        Ok(posts.iter().map(PostResponse::from).collect())
    }
}
