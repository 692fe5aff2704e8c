//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pulse_core::entities::Comment;
use pulse_core::traits::{CommentRepository, CommentWithAuthor, RepoResult};
use pulse_core::value_objects::Snowflake;

use crate::models::{CommentModel, CommentWithAuthorModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, user_id, post_id, text, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.user_id.into_inner())
        .bind(comment.post_id.into_inner())
        .bind(&comment.text)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Snowflake, limit: i64) -> RepoResult<Vec<CommentWithAuthor>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT c.id, c.user_id, c.post_id, c.text, c.created_at, u.username
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.post_id = $1
            ORDER BY c.created_at DESC
            LIMIT $2
            ",
        )
        .bind(post_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentWithAuthor::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<Comment>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, user_id, post_id, text, created_at
            FROM comments
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }
}
