//! PostgreSQL implementation of ReactionRepository
//!
//! `apply` runs inside a single transaction. The post row is locked before
//! the existing reaction is read, so the like_count delta and the reaction
//! row mutation commit together and racers on the same post serialize.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pulse_core::entities::{plan_reaction, Reaction, ReactionChange, ReactionKind};
use pulse_core::error::DomainError;
use pulse_core::traits::{ReactionOutcome, ReactionRepository, RepoResult};
use pulse_core::value_objects::Snowflake;

use crate::models::ReactionModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT id, user_id, post_id, is_like, created_at, updated_at
            FROM post_reactions
            WHERE post_id = $1 AND user_id = $2
            ",
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn apply(
        &self,
        reaction_id: Snowflake,
        post_id: Snowflake,
        user_id: Snowflake,
        desired: ReactionKind,
    ) -> RepoResult<ReactionOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the post row before reading the reaction state.
        let post = sqlx::query_as::<_, (i64, i64)>(
            r"
            SELECT user_id, like_count FROM posts WHERE id = $1 FOR UPDATE
            ",
        )
        .bind(post_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some((owner_id, _)) = post else {
            return Err(DomainError::PostNotFound(post_id));
        };

        let current: Option<bool> = sqlx::query_scalar(
            r"
            SELECT is_like FROM post_reactions WHERE post_id = $1 AND user_id = $2
            ",
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let change = plan_reaction(current, desired)?;

        match change {
            ReactionChange::Create { is_like, .. } => {
                let on_conflict = || match desired {
                    ReactionKind::Like => DomainError::AlreadyLiked,
                    ReactionKind::Dislike => DomainError::AlreadyDisliked,
                };

                sqlx::query(
                    r"
                    INSERT INTO post_reactions (id, user_id, post_id, is_like, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, NOW(), NOW())
                    ",
                )
                .bind(reaction_id.into_inner())
                .bind(user_id.into_inner())
                .bind(post_id.into_inner())
                .bind(is_like)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_unique_violation(e, on_conflict))?;
            }
            ReactionChange::Flip { is_like, .. } => {
                sqlx::query(
                    r"
                    UPDATE post_reactions
                    SET is_like = $3, updated_at = NOW()
                    WHERE post_id = $1 AND user_id = $2
                    ",
                )
                .bind(post_id.into_inner())
                .bind(user_id.into_inner())
                .bind(is_like)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        let like_count = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE posts SET like_count = like_count + $2 WHERE id = $1
            RETURNING like_count
            ",
        )
        .bind(post_id.into_inner())
        .bind(change.delta())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(ReactionOutcome {
            post_id,
            owner_id: Snowflake::new(owner_id),
            like_count,
        })
    }

    #[instrument(skip(self))]
    async fn count_for_post(&self, post_id: Snowflake) -> RepoResult<(i64, i64)> {
        let (likes, dislikes) = sqlx::query_as::<_, (i64, i64)>(
            r"
            SELECT
                COUNT(*) FILTER (WHERE is_like),
                COUNT(*) FILTER (WHERE NOT is_like)
            FROM post_reactions
            WHERE post_id = $1
            ",
        )
        .bind(post_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((likes, dislikes))
    }
}
