//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in pulse-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod poll;
mod post;
mod reaction;
mod user;

pub use comment::PgCommentRepository;
pub use poll::PgPollRepository;
pub use post::PgPostRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
