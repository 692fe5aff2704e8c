//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use pulse_core::entities::{Poll, PollOption, PollWithOptions, Post, User};
use pulse_core::traits::CommentWithAuthor;

use super::responses::{
    CommentResponse, CurrentUserResponse, PollOptionResponse, PollResponse, PostResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            avatar_url: user.avatar_url.clone(),
            total_likes: user.total_likes,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            avatar_url: user.avatar_url.clone(),
            total_likes: user.total_likes,
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            user_id: post.user_id.to_string(),
            media_type: post.media_type.as_str().to_string(),
            content_url: post.content_url.clone(),
            category: post.category.clone(),
            like_count: post.like_count,
            created_at: post.created_at,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&CommentWithAuthor> for CommentResponse {
    fn from(c: &CommentWithAuthor) -> Self {
        Self {
            id: c.comment.id.to_string(),
            user_id: c.comment.user_id.to_string(),
            username: c.username.clone(),
            post_id: c.comment.post_id.to_string(),
            text: c.comment.text.clone(),
            created_at: c.comment.created_at,
        }
    }
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(c: CommentWithAuthor) -> Self {
        Self::from(&c)
    }
}

// ============================================================================
// Poll Mappers
// ============================================================================

impl From<&PollOption> for PollOptionResponse {
    fn from(option: &PollOption) -> Self {
        Self {
            id: option.id.to_string(),
            text: option.text.clone(),
            vote_count: option.vote_count,
            position: option.position,
        }
    }
}

impl From<&PollWithOptions> for PollResponse {
    fn from(poll: &PollWithOptions) -> Self {
        Self {
            id: poll.poll.id.to_string(),
            user_id: poll.poll.user_id.to_string(),
            username: poll.username.clone(),
            title: poll.poll.title.clone(),
            total_votes: poll.total_votes(),
            options: poll.options.iter().map(PollOptionResponse::from).collect(),
            created_at: poll.poll.created_at,
        }
    }
}

impl From<PollWithOptions> for PollResponse {
    fn from(poll: PollWithOptions) -> Self {
        Self::from(&poll)
    }
}

/// Build a PollResponse from separately held poll, owner username, and options
pub fn poll_response(poll: &Poll, username: &str, options: &[PollOption]) -> PollResponse {
    let total_votes = options.iter().map(|o| o.vote_count).sum();
    PollResponse {
        id: poll.id.to_string(),
        user_id: poll.user_id.to_string(),
        username: username.to_string(),
        title: poll.title.clone(),
        total_votes,
        options: options.iter().map(PollOptionResponse::from).collect(),
        created_at: poll.created_at,
    }
}
