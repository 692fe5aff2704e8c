//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The two `apply`/`cast_vote` operations carry
//! a transactional contract: implementations must run the whole check-and-
//! mutate sequence as one atomic unit (row locks or an equivalent
//! serializable scheme), so concurrent callers can never lose an update or
//! double-insert.

use async_trait::async_trait;

use crate::entities::{Comment, Poll, PollOption, PollVote, PollWithOptions, Post, Reaction, ReactionKind, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update username/avatar of an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Recompute the cached `total_likes` aggregate from the user's posts
    /// and persist it. Returns the recomputed value.
    async fn refresh_total_likes(&self, id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// List a user's own posts, newest first
    async fn find_by_author(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<Post>>;

    /// List other users' posts, newest first
    async fn find_explore(&self, excluding: Snowflake, limit: i64) -> RepoResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Count a user's posts
    async fn count_by_author(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Bookmark a post for a user. The post must exist (`PostNotFound`);
    /// a second save for the same (user, post) pair fails with
    /// `AlreadySaved`, backed by a unique constraint.
    async fn save_for_user(
        &self,
        save_id: Snowflake,
        user_id: Snowflake,
        post_id: Snowflake,
    ) -> RepoResult<()>;

    /// List a user's saved posts, most recently saved first
    async fn find_saved(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<Post>>;
}

// ============================================================================
// Poll Repository
// ============================================================================

#[async_trait]
pub trait PollRepository: Send + Sync {
    /// Fetch a poll with its options (ordered by position)
    async fn find_with_options(&self, poll_id: Snowflake) -> RepoResult<Option<PollWithOptions>>;

    /// List a user's own polls with options, newest first
    async fn find_by_owner(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<PollWithOptions>>;

    /// List other users' polls with options
    async fn find_explore(&self, excluding: Snowflake, limit: i64) -> RepoResult<Vec<PollWithOptions>>;

    /// Create a poll together with its options
    async fn create(&self, poll: &Poll, options: &[PollOption]) -> RepoResult<()>;

    /// Cast a vote as one atomic unit.
    ///
    /// Contract: lock the poll row and then the target option row before any
    /// read used in the decision; reject with `InvalidPollOption` when either
    /// is missing or the option belongs to another poll; reject with
    /// `AlreadyVoted` when a vote row for (user, poll) exists; otherwise
    /// insert the vote row and increment the option's `vote_count` by exactly
    /// one. Either both mutations commit or neither does. A unique constraint
    /// over (user_id, poll_id) backs the duplicate check.
    async fn cast_vote(&self, vote: &PollVote) -> RepoResult<()>;

    /// Count PollVote rows referencing a poll
    async fn count_votes(&self, poll_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

/// Result of a successfully applied reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionOutcome {
    pub post_id: Snowflake,
    /// Owner of the post, whose `total_likes` must be refreshed next
    pub owner_id: Snowflake,
    /// The post's like count after the transition
    pub like_count: i64,
}

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find a user's reaction row for a post
    async fn find(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// Apply a like/dislike transition as one atomic unit.
    ///
    /// Contract: lock the post row before reading the existing reaction,
    /// evaluate [`crate::entities::plan_reaction`], then create or flip the
    /// reaction row and adjust the post's `like_count` by the plan's delta in
    /// the same transaction. `reaction_id` is used only when a new row is
    /// created. Fails with `PostNotFound`, `AlreadyLiked`, or
    /// `AlreadyDisliked`; on failure nothing is mutated.
    async fn apply(
        &self,
        reaction_id: Snowflake,
        post_id: Snowflake,
        user_id: Snowflake,
        desired: ReactionKind,
    ) -> RepoResult<ReactionOutcome>;

    /// Count (likes, dislikes) rows for a post
    async fn count_for_post(&self, post_id: Snowflake) -> RepoResult<(i64, i64)>;
}

// ============================================================================
// Comment Repository
// ============================================================================

/// Comment joined with its author's username
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub username: String,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// List comments on a post with author usernames, newest first
    async fn find_by_post(&self, post_id: Snowflake, limit: i64) -> RepoResult<Vec<CommentWithAuthor>>;

    /// List a user's own comments, newest first
    async fn find_by_author(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<Comment>>;
}
