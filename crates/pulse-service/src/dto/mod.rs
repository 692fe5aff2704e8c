//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateCommentRequest, CreatePollRequest, CreatePostRequest, LoginRequest, RegisterRequest,
    UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, AuthResponse, CommentResponse, CurrentUserResponse, HealthChecks, HealthResponse,
    PollOptionResponse, PollResponse, PostResponse, ProfileResponse, ReactionResponse,
    ReadinessResponse, UserResponse, UserStatsResponse,
};

// Re-export mapper helpers
pub use mappers::poll_response;
