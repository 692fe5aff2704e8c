//! # pulse-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! reaction state machine. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    plan_reaction, validate_poll_options, Comment, MediaType, Poll, PollOption, PollVote,
    PollWithOptions, Post, Reaction, ReactionChange, ReactionKind, User,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, CommentWithAuthor, PollRepository, PostRepository, ReactionOutcome,
    ReactionRepository, RepoResult, UserRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
