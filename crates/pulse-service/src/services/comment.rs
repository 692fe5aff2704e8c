//! Comment service

use pulse_core::entities::Comment;
use pulse_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default page size for comment listings
const DEFAULT_COMMENT_LIMIT: i64 = 50;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to a post
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        user_id: Snowflake,
        post_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        // The post must exist; comments carry no FK-deferred insert path.
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let comment = Comment::new(self.ctx.generate_id(), user_id, post.id, request.text);

        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment created");

        Ok(CommentResponse {
            id: comment.id.to_string(),
            user_id: user_id.to_string(),
            username: user.username,
            post_id: post_id.to_string(),
            text: comment.text,
            created_at: comment.created_at,
        })
    }

    /// List comments on a post, newest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, post_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        // 404 for a missing post rather than an empty list.
        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(ServiceError::not_found("Post", post_id.to_string()));
        }

        let comments = self
            .ctx
            .comment_repo()
            .find_by_post(post_id, DEFAULT_COMMENT_LIMIT)
            .await?;

        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// List the current user's own comments, newest first
    #[instrument(skip(self))]
    pub async fn list_own_comments(
        &self,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let comments = self
            .ctx
            .comment_repo()
            .find_by_author(user_id, DEFAULT_COMMENT_LIMIT)
            .await?;

        Ok(comments
            .into_iter()
            .map(|comment| CommentResponse {
                id: comment.id.to_string(),
                user_id: user_id.to_string(),
                username: user.username.clone(),
                post_id: comment.post_id.to_string(),
                text: comment.text,
                created_at: comment.created_at,
            })
            .collect())
    }
}
