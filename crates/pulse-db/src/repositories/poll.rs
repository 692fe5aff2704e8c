//! PostgreSQL implementation of PollRepository
//!
//! `cast_vote` is the concurrency-sensitive path: it runs inside a single
//! transaction, locking the poll row and then the option row before any
//! decision is made. The (user_id, poll_id) unique index backs the duplicate
//! check for racers that pass the pre-check simultaneously.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pulse_core::entities::{Poll, PollOption, PollVote, PollWithOptions};
use pulse_core::error::DomainError;
use pulse_core::traits::{PollRepository, RepoResult};
use pulse_core::value_objects::Snowflake;

use crate::models::{PollOptionModel, PollWithOwnerModel};

use super::error::map_db_error;

/// PostgreSQL implementation of PollRepository
#[derive(Clone)]
pub struct PgPollRepository {
    pool: PgPool,
}

impl PgPollRepository {
    /// Create a new PgPollRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load options for a batch of polls and assemble PollWithOptions,
    /// preserving poll order.
    async fn attach_options(&self, polls: Vec<PollWithOwnerModel>) -> RepoResult<Vec<PollWithOptions>> {
        if polls.is_empty() {
            return Ok(Vec::new());
        }

        let poll_ids: Vec<i64> = polls.iter().map(|p| p.id).collect();

        let option_rows = sqlx::query_as::<_, PollOptionModel>(
            r"
            SELECT id, poll_id, text, vote_count, position
            FROM poll_options
            WHERE poll_id = ANY($1)
            ORDER BY poll_id, position
            ",
        )
        .bind(&poll_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut result: Vec<PollWithOptions> =
            polls.into_iter().map(PollWithOptions::from).collect();

        for row in option_rows {
            if let Some(entry) = result
                .iter_mut()
                .find(|e| e.poll.id.into_inner() == row.poll_id)
            {
                entry.options.push(PollOption::from(row));
            }
        }

        Ok(result)
    }
}

#[async_trait]
impl PollRepository for PgPollRepository {
    #[instrument(skip(self))]
    async fn find_with_options(&self, poll_id: Snowflake) -> RepoResult<Option<PollWithOptions>> {
        let poll = sqlx::query_as::<_, PollWithOwnerModel>(
            r"
            SELECT p.id, p.user_id, p.title, p.created_at, u.username
            FROM polls p
            JOIN users u ON u.id = p.user_id
            WHERE p.id = $1
            ",
        )
        .bind(poll_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(poll) = poll else {
            return Ok(None);
        };

        let options = sqlx::query_as::<_, PollOptionModel>(
            r"
            SELECT id, poll_id, text, vote_count, position
            FROM poll_options
            WHERE poll_id = $1
            ORDER BY position
            ",
        )
        .bind(poll_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut with_options = PollWithOptions::from(poll);
        with_options.options = options.into_iter().map(PollOption::from).collect();
        Ok(Some(with_options))
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<PollWithOptions>> {
        let limit = limit.clamp(1, 100);

        let polls = sqlx::query_as::<_, PollWithOwnerModel>(
            r"
            SELECT p.id, p.user_id, p.title, p.created_at, u.username
            FROM polls p
            JOIN users u ON u.id = p.user_id
            WHERE p.user_id = $1
            ORDER BY p.created_at DESC
            LIMIT $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.attach_options(polls).await
    }

    #[instrument(skip(self))]
    async fn find_explore(&self, excluding: Snowflake, limit: i64) -> RepoResult<Vec<PollWithOptions>> {
        let limit = limit.clamp(1, 100);

        let polls = sqlx::query_as::<_, PollWithOwnerModel>(
            r"
            SELECT p.id, p.user_id, p.title, p.created_at, u.username
            FROM polls p
            JOIN users u ON u.id = p.user_id
            WHERE p.user_id <> $1
            ORDER BY p.created_at DESC
            LIMIT $2
            ",
        )
        .bind(excluding.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.attach_options(polls).await
    }

    #[instrument(skip(self, options))]
    async fn create(&self, poll: &Poll, options: &[PollOption]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO polls (id, user_id, title, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(poll.id.into_inner())
        .bind(poll.user_id.into_inner())
        .bind(&poll.title)
        .bind(poll.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for option in options {
            sqlx::query(
                r"
                INSERT INTO poll_options (id, poll_id, text, vote_count, position)
                VALUES ($1, $2, $3, 0, $4)
                ",
            )
            .bind(option.id.into_inner())
            .bind(option.poll_id.into_inner())
            .bind(&option.text)
            .bind(option.position)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn cast_vote(&self, vote: &PollVote) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock order: poll row first, then the option row. Every voter on
        // this poll serializes on the poll lock.
        let poll_exists = sqlx::query_scalar::<_, i64>(
            r"
            SELECT id FROM polls WHERE id = $1 FOR UPDATE
            ",
        )
        .bind(vote.poll_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if poll_exists.is_none() {
            return Err(DomainError::InvalidPollOption);
        }

        // The option must belong to the poll being voted on.
        let option_id = sqlx::query_scalar::<_, i64>(
            r"
            SELECT id FROM poll_options
            WHERE id = $1 AND poll_id = $2
            FOR UPDATE
            ",
        )
        .bind(vote.option_id.into_inner())
        .bind(vote.poll_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if option_id.is_none() {
            return Err(DomainError::InvalidPollOption);
        }

        let already_voted = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM poll_votes WHERE user_id = $1 AND poll_id = $2)
            ",
        )
        .bind(vote.user_id.into_inner())
        .bind(vote.poll_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if already_voted {
            return Err(DomainError::AlreadyVoted);
        }

        sqlx::query(
            r"
            INSERT INTO poll_votes (id, user_id, poll_id, option_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(vote.id.into_inner())
        .bind(vote.user_id.into_inner())
        .bind(vote.poll_id.into_inner())
        .bind(vote.option_id.into_inner())
        .bind(vote.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| super::error::map_unique_violation(e, || DomainError::AlreadyVoted))?;

        sqlx::query(
            r"
            UPDATE poll_options SET vote_count = vote_count + 1 WHERE id = $1
            ",
        )
        .bind(vote.option_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_votes(&self, poll_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM poll_votes WHERE poll_id = $1
            ",
        )
        .bind(poll_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
