//! Reaction handlers
//!
//! Like and dislike endpoints for posts.

use axum::{
    extract::{Path, State},
    Json,
};
use pulse_service::{ReactionResponse, ReactionService};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Like a post
///
/// POST /posts/{post_id}/like
pub async fn like_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
) -> ApiResult<Json<ReactionResponse>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = ReactionService::new(state.service_context());
    let response = service.like(post_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Dislike a post
///
/// POST /posts/{post_id}/dislike
pub async fn dislike_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
) -> ApiResult<Json<ReactionResponse>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = ReactionService::new(state.service_context());
    let response = service.dislike(post_id, auth.user_id).await?;
    Ok(Json(response))
}
