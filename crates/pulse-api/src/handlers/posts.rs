//! Post handlers
//!
//! Endpoints for creating posts and reading the own/explore feeds.

use axum::{
    extract::{Path, State},
    Json,
};
use pulse_service::{CreatePostRequest, PostResponse, PostService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service.create_post(auth.user_id, request).await?;
    Ok(Created(Json(post)))
}

/// List the current user's own posts
///
/// GET /posts/@me
pub async fn get_own_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_own_posts(auth.user_id).await?;
    Ok(Json(posts))
}

/// List other users' posts for the explore feed
///
/// GET /posts/explore
pub async fn get_explore_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_explore_posts(auth.user_id).await?;
    Ok(Json(posts))
}

/// Bookmark a post for the current user
///
/// POST /posts/{post_id}/save
pub async fn save_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
) -> ApiResult<NoContent> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = PostService::new(state.service_context());
    service.save_post(auth.user_id, post_id).await?;
    Ok(NoContent)
}

/// List the current user's saved posts
///
/// GET /posts/saved
pub async fn get_saved_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_saved_posts(auth.user_id).await?;
    Ok(Json(posts))
}

/// Get a single post
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(post_id): Path<String>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = PostService::new(state.service_context());
    let post = service.get_post(post_id).await?;
    Ok(Json(post))
}
