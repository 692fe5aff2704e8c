//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{auth, comments, health, polls, posts, reactions, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(post_routes())
        .merge(poll_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/logout-all", post(auth::logout_all))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route("/users/@me/stats", get(users::get_current_user_stats))
        .route("/users/@me/comments", get(comments::get_own_comments))
        .route("/users/:user_id", get(users::get_user))
}

/// Post routes, including reactions and comments
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(posts::create_post))
        .route("/posts/@me", get(posts::get_own_posts))
        .route("/posts/explore", get(posts::get_explore_posts))
        .route("/posts/saved", get(posts::get_saved_posts))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/:post_id/save", post(posts::save_post))
        .route("/posts/:post_id/like", post(reactions::like_post))
        .route("/posts/:post_id/dislike", post(reactions::dislike_post))
        .route("/posts/:post_id/comments", post(comments::create_comment))
        .route("/posts/:post_id/comments", get(comments::get_post_comments))
}

/// Poll routes
fn poll_routes() -> Router<AppState> {
    Router::new()
        .route("/polls", post(polls::create_poll))
        .route("/polls/@me", get(polls::get_own_polls))
        .route("/polls/explore", get(polls::get_explore_polls))
        .route("/polls/:poll_id", get(polls::get_poll))
        .route(
            "/polls/:poll_id/options/:option_id/vote",
            post(polls::vote),
        )
}
