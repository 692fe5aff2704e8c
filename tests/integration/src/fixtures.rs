//! Test fixtures and data generators
//!
//! Provides reusable test data and response mirrors for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Request fixtures
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        // Nanos keep parallel test binaries from colliding on the same email
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        Self {
            username: format!("testuser{suffix}x{nanos}"),
            email: format!("test{suffix}x{nanos}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub media_type: String,
    pub content_url: String,
    pub category: Option<String>,
}

impl CreatePostRequest {
    pub fn image() -> Self {
        let suffix = unique_suffix();
        Self {
            media_type: "image".to_string(),
            content_url: format!("https://cdn.example.com/img{suffix}.jpg"),
            category: Some("general".to_string()),
        }
    }
}

/// Create poll request
#[derive(Debug, Serialize)]
pub struct CreatePollRequest {
    pub title: String,
    pub options: Vec<String>,
}

impl CreatePollRequest {
    pub fn two_options() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Best color {suffix}?"),
            options: vec!["Red".to_string(), "Blue".to_string()],
        }
    }
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

// ============================================================================
// Response mirrors
// ============================================================================

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: CurrentUserResponse,
}

/// Current user response (includes email)
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub total_likes: i64,
    pub created_at: String,
}

/// Public user response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub total_likes: i64,
    pub created_at: String,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub post_count: i64,
}

/// Stats response
#[derive(Debug, Deserialize)]
pub struct UserStatsResponse {
    pub post_count: i64,
    pub total_likes: i64,
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub media_type: String,
    pub content_url: String,
    pub category: Option<String>,
    pub like_count: i64,
    pub created_at: String,
}

/// Reaction response
#[derive(Debug, Deserialize)]
pub struct ReactionResponse {
    pub post_id: String,
    pub like_count: i64,
    pub author_total_likes: i64,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub post_id: String,
    pub text: String,
    pub created_at: String,
}

/// Poll option response
#[derive(Debug, Deserialize)]
pub struct PollOptionResponse {
    pub id: String,
    pub text: String,
    pub vote_count: i64,
    pub position: i32,
}

/// Poll response
#[derive(Debug, Deserialize)]
pub struct PollResponse {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub title: String,
    pub options: Vec<PollOptionResponse>,
    pub total_votes: i64,
    pub created_at: String,
}
