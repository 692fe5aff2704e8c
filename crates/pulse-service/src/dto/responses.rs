//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response returned by register and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(user: CurrentUserResponse) -> Self {
        Self { user }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user response (limited fields)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub total_likes: i64,
    pub created_at: DateTime<Utc>,
}

/// Current authenticated user response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub total_likes: i64,
    pub created_at: DateTime<Utc>,
}

/// Profile response with content counts
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub post_count: i64,
}

/// Aggregate stats for the current user
#[derive(Debug, Clone, Serialize)]
pub struct UserStatsResponse {
    pub post_count: i64,
    pub total_likes: i64,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub media_type: String,
    pub content_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Result of a like/dislike action
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub post_id: String,
    /// The post's like count after the action
    pub like_count: i64,
    /// The post author's refreshed total_likes aggregate
    pub author_total_likes: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment response with author username
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub post_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Poll Responses
// ============================================================================

/// Poll option response
#[derive(Debug, Clone, Serialize)]
pub struct PollOptionResponse {
    pub id: String,
    pub text: String,
    pub vote_count: i64,
    pub position: i32,
}

/// Poll response with options and the owner's username
#[derive(Debug, Clone, Serialize)]
pub struct PollResponse {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub title: String,
    pub options: Vec<PollOptionResponse>,
    pub total_votes: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
