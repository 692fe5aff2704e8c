//! Authentication service
//!
//! Handles user registration, login, and logout with Redis-backed sessions.

use pulse_cache::SessionData;
use pulse_common::auth::{hash_password, validate_password_strength, verify_password};
use pulse_common::AppError;
use pulse_core::entities::User;
use pulse_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and open a session
    ///
    /// Returns the session token alongside the response body.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<(String, AuthResponse)> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(ServiceError::conflict("Username already taken"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let user = User::new(user_id, request.username, request.email);

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, "User registered");

        let token = self.open_session(user_id).await?;

        Ok((token, AuthResponse::new(CurrentUserResponse::from(&user))))
    }

    /// Login with email and password, opening a session
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<(String, AuthResponse)> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidCredentials))?;

        let hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidCredentials))?;

        let valid = verify_password(&request.password, &hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !valid {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in");

        let token = self.open_session(user.id).await?;

        Ok((token, AuthResponse::new(CurrentUserResponse::from(&user))))
    }

    /// Logout by revoking the session token
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> ServiceResult<()> {
        self.ctx
            .session_store()
            .revoke(token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        Ok(())
    }

    /// Logout from all devices
    #[instrument(skip(self))]
    pub async fn logout_all(&self, user_id: Snowflake) -> ServiceResult<u32> {
        self.ctx
            .session_store()
            .revoke_all_for_user(user_id)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))
    }

    /// Resolve a session token to the authenticated user's ID
    ///
    /// Extends the session TTL on success.
    pub async fn resolve_session(&self, token: &str) -> ServiceResult<Option<Snowflake>> {
        let data = self
            .ctx
            .session_store()
            .get_and_touch(token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(data.map(|d| d.user_id))
    }

    async fn open_session(&self, user_id: Snowflake) -> ServiceResult<String> {
        let data = SessionData::new(user_id);
        self.ctx
            .session_store()
            .create(&data)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))
    }
}
