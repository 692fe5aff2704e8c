//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use pulse_service::{CommentResponse, CommentService, CreateCommentRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Add a comment to a post
///
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = CommentService::new(state.service_context());
    let comment = service.create_comment(auth.user_id, post_id, request).await?;
    Ok(Created(Json(comment)))
}

/// List comments on a post
///
/// GET /posts/{post_id}/comments
pub async fn get_post_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(post_id): Path<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = CommentService::new(state.service_context());
    let comments = service.list_comments(post_id).await?;
    Ok(Json(comments))
}

/// List the current user's own comments
///
/// GET /users/@me/comments
pub async fn get_own_comments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list_own_comments(auth.user_id).await?;
    Ok(Json(comments))
}
