//! Reaction service
//!
//! Applies like/dislike actions to posts and keeps the author's cached
//! total_likes aggregate in step.

use pulse_core::entities::ReactionKind;
use pulse_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::ReactionResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a post
    #[instrument(skip(self))]
    pub async fn like(&self, post_id: Snowflake, user_id: Snowflake) -> ServiceResult<ReactionResponse> {
        self.react(post_id, user_id, ReactionKind::Like).await
    }

    /// Dislike a post
    #[instrument(skip(self))]
    pub async fn dislike(&self, post_id: Snowflake, user_id: Snowflake) -> ServiceResult<ReactionResponse> {
        self.react(post_id, user_id, ReactionKind::Dislike).await
    }

    async fn react(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        desired: ReactionKind,
    ) -> ServiceResult<ReactionResponse> {
        let reaction_id = self.ctx.generate_id();

        let outcome = self
            .ctx
            .reaction_repo()
            .apply(reaction_id, post_id, user_id, desired)
            .await?;

        // The aggregate refresh runs after the reaction transaction commits.
        // A crash between the two leaves total_likes stale until the next
        // reaction on any of the author's posts heals it.
        let author_total_likes = self
            .ctx
            .user_repo()
            .refresh_total_likes(outcome.owner_id)
            .await?;

        info!(
            post_id = %post_id,
            user_id = %user_id,
            like_count = outcome.like_count,
            "Reaction applied"
        );

        Ok(ReactionResponse {
            post_id: post_id.to_string(),
            like_count: outcome.like_count,
            author_total_likes,
        })
    }
}
