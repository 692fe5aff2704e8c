//! Poll service
//!
//! Poll creation, feeds, and the vote operation.

use pulse_core::entities::{validate_poll_options, Poll, PollOption, PollVote};
use pulse_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{poll_response, CreatePollRequest, PollResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default page size for poll feeds
const DEFAULT_FEED_LIMIT: i64 = 50;

/// Poll service
pub struct PollService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PollService<'a> {
    /// Create a new PollService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a poll with its options
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_poll(
        &self,
        user_id: Snowflake,
        request: CreatePollRequest,
    ) -> ServiceResult<PollResponse> {
        validate_poll_options(&request.options)?;

        let owner = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let poll = Poll::new(self.ctx.generate_id(), user_id, request.title);

        let options: Vec<PollOption> = request
            .options
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                PollOption::new(self.ctx.generate_id(), poll.id, text, i as i32)
            })
            .collect();

        self.ctx.poll_repo().create(&poll, &options).await?;

        info!(poll_id = %poll.id, user_id = %user_id, "Poll created");

        Ok(poll_response(&poll, &owner.username, &options))
    }

    /// Get a single poll with options
    #[instrument(skip(self))]
    pub async fn get_poll(&self, poll_id: Snowflake) -> ServiceResult<PollResponse> {
        let poll = self
            .ctx
            .poll_repo()
            .find_with_options(poll_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Poll", poll_id.to_string()))?;

        Ok(PollResponse::from(&poll))
    }

    /// List the current user's own polls
    #[instrument(skip(self))]
    pub async fn list_own_polls(&self, user_id: Snowflake) -> ServiceResult<Vec<PollResponse>> {
        let polls = self
            .ctx
            .poll_repo()
            .find_by_owner(user_id, DEFAULT_FEED_LIMIT)
            .await?;

        Ok(polls.iter().map(PollResponse::from).collect())
    }

    /// List other users' polls for the explore feed
    #[instrument(skip(self))]
    pub async fn list_explore_polls(&self, user_id: Snowflake) -> ServiceResult<Vec<PollResponse>> {
        let polls = self
            .ctx
            .poll_repo()
            .find_explore(user_id, DEFAULT_FEED_LIMIT)
            .await?;

        Ok(polls.iter().map(PollResponse::from).collect())
    }

    /// Cast a vote on a poll
    ///
    /// The duplicate and membership checks run inside the repository's
    /// transaction; this method only shapes the request and the response.
    #[instrument(skip(self))]
    pub async fn vote(
        &self,
        user_id: Snowflake,
        poll_id: Snowflake,
        option_id: Snowflake,
    ) -> ServiceResult<PollResponse> {
        let vote = PollVote::new(self.ctx.generate_id(), user_id, poll_id, option_id);

        self.ctx.poll_repo().cast_vote(&vote).await?;

        info!(poll_id = %poll_id, user_id = %user_id, option_id = %option_id, "Vote cast");

        // Return the updated tallies.
        self.get_poll(poll_id).await
    }
}
