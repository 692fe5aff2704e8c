//! # pulse-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, CommentService, PollService, PostService, ReactionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};

pub use dto::{
    ApiResponse, AuthResponse, CommentResponse, CreateCommentRequest, CreatePollRequest,
    CreatePostRequest, CurrentUserResponse, HealthResponse, LoginRequest, PollOptionResponse,
    PollResponse, PostResponse, ProfileResponse, ReactionResponse, ReadinessResponse,
    RegisterRequest, UpdateUserRequest, UserResponse, UserStatsResponse,
};
