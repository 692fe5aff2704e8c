//! User service
//!
//! Profile lookup and updates.

use pulse_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CurrentUserResponse, ProfileResponse, UpdateUserRequest, UserResponse, UserStatsResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the current authenticated user
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Get a user's public profile with post count
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let post_count = self.ctx.post_repo().count_by_author(user_id).await?;

        Ok(ProfileResponse {
            user: UserResponse::from(&user),
            post_count,
        })
    }

    /// Get the current user's aggregate stats
    ///
    /// `total_likes` is the cached aggregate maintained by the reaction flow,
    /// not a live recount.
    #[instrument(skip(self))]
    pub async fn get_stats(&self, user_id: Snowflake) -> ServiceResult<UserStatsResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let post_count = self.ctx.post_repo().count_by_author(user_id).await?;

        Ok(UserStatsResponse {
            post_count,
            total_likes: user.total_likes,
        })
    }

    /// Update the current user's profile
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(username) = request.username {
            if username != user.username
                && self.ctx.user_repo().username_exists(&username).await?
            {
                return Err(ServiceError::conflict("Username already taken"));
            }
            user.set_username(username);
        }

        if let Some(avatar_url) = request.avatar_url {
            user.set_avatar_url(Some(avatar_url));
        }

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "User profile updated");

        Ok(CurrentUserResponse::from(&user))
    }
}
