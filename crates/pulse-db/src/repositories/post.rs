//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pulse_core::entities::Post;
use pulse_core::error::DomainError;
use pulse_core::traits::{PostRepository, RepoResult};
use pulse_core::value_objects::Snowflake;

use crate::mappers::PostInsert;
use crate::models::PostModel;

use super::error::{map_db_error, map_unique_violation, post_not_found};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, user_id, media_type, content_url, category, like_count, created_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<Post>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, user_id, media_type, content_url, category, like_count, created_at
            FROM posts
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

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_explore(&self, excluding: Snowflake, limit: i64) -> RepoResult<Vec<Post>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, user_id, media_type, content_url, category, like_count, created_at
            FROM posts
            WHERE user_id <> $1
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(excluding.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        let insert = PostInsert::new(post);

        sqlx::query(
            r"
            INSERT INTO posts (id, user_id, media_type, content_url, category, like_count, created_at)
            VALUES ($1, $2, $3, $4, $5, 0, $6)
            ",
        )
        .bind(insert.id)
        .bind(insert.user_id)
        .bind(insert.media_type)
        .bind(insert.content_url)
        .bind(insert.category)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn save_for_user(
        &self,
        save_id: Snowflake,
        user_id: Snowflake,
        post_id: Snowflake,
    ) -> RepoResult<()> {
        let post_exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)
            ",
        )
        .bind(post_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if !post_exists {
            return Err(post_not_found(post_id));
        }

        sqlx::query(
            r"
            INSERT INTO saved_posts (id, user_id, post_id)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(save_id.into_inner())
        .bind(user_id.into_inner())
        .bind(post_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadySaved))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_saved(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<Post>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT p.id, p.user_id, p.media_type, p.content_url, p.category,
                   p.like_count, p.created_at
            FROM saved_posts sp
            JOIN posts p ON p.id = sp.post_id
            WHERE sp.user_id = $1
            ORDER BY sp.created_at DESC
            LIMIT $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_author(&self, user_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM posts WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
