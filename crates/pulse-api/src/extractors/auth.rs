//! Authentication extractor
//!
//! Resolves the session cookie against the Redis session store. The lookup
//! also extends the session's TTL (sliding expiration).

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use pulse_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from the session cookie
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID the session belongs to
    pub user_id: Snowflake,
    /// The session token, kept so handlers like logout can revoke it
    pub session_token: String,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Snowflake, session_token: String) -> Self {
        Self {
            user_id,
            session_token,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // CookieJar extraction is infallible
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingSession)?;

        let token = jar
            .get(app_state.session_cookie_name())
            .map(|cookie| cookie.value().to_string())
            .ok_or(ApiError::MissingSession)?;

        let session = app_state
            .service_context()
            .session_store()
            .get_and_touch(&token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Session store lookup failed");
                ApiError::internal(e)
            })?
            .ok_or(ApiError::InvalidSession)?;

        Ok(AuthUser::new(session.user_id, token))
    }
}
