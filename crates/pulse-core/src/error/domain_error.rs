//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Poll not found: {0}")]
    PollNotFound(Snowflake),

    // =========================================================================
    // Reference Errors
    // =========================================================================
    /// The poll does not exist, or the option does not belong to it.
    #[error("Invalid poll or option")]
    InvalidPollOption,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Poll options must be unique")]
    DuplicatePollOptions,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Username already in use")]
    UsernameAlreadyExists,

    /// A PollVote row already exists for this (user, poll) pair.
    #[error("User has already voted on this poll")]
    AlreadyVoted,

    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Post already disliked")]
    AlreadyDisliked,

    /// A saved_posts row already exists for this (user, post) pair.
    #[error("Post already saved")]
    AlreadySaved,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::PollNotFound(_) => "UNKNOWN_POLL",

            // Reference
            Self::InvalidPollOption => "INVALID_POLL_OPTION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::DuplicatePollOptions => "DUPLICATE_POLL_OPTIONS",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::AlreadyVoted => "ALREADY_VOTED",
            Self::AlreadyLiked => "ALREADY_LIKED",
            Self::AlreadyDisliked => "ALREADY_DISLIKED",
            Self::AlreadySaved => "ALREADY_SAVED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::PostNotFound(_) | Self::PollNotFound(_)
        )
    }

    /// Check if this is a validation error (bad request input)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::DuplicatePollOptions
                | Self::ContentTooLong { .. }
                | Self::InvalidPollOption
        )
    }

    /// Check if this is a conflict error (current state rejects the request)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::UsernameAlreadyExists
                | Self::AlreadyVoted
                | Self::AlreadyLiked
                | Self::AlreadyDisliked
                | Self::AlreadySaved
        )
    }

    /// Check if the store reported a transient failure that the caller may retry
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::CacheError(_))
    }
}
