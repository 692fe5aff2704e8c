//! User handlers
//!
//! Endpoints for the current user and public profiles.

use axum::{
    extract::{Path, State},
    Json,
};
use pulse_service::{
    CurrentUserResponse, ProfileResponse, UpdateUserRequest, UserService, UserStatsResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get the current authenticated user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.get_current_user(auth.user_id).await?;
    Ok(Json(user))
}

/// Update the current user's profile
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.update_user(auth.user_id, request).await?;
    Ok(Json(user))
}

/// Get the current user's aggregate stats
///
/// GET /users/@me/stats
pub async fn get_current_user_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserStatsResponse>> {
    let service = UserService::new(state.service_context());
    let stats = service.get_stats(auth.user_id).await?;
    Ok(Json(stats))
}

/// Get a user's public profile
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = UserService::new(state.service_context());
    let profile = service.get_profile(user_id).await?;
    Ok(Json(profile))
}
