//! Domain entities

mod comment;
mod poll;
mod post;
mod reaction;
mod user;

pub use comment::Comment;
pub use poll::{validate_poll_options, Poll, PollOption, PollVote, PollWithOptions};
pub use post::{MediaType, Post};
pub use reaction::{plan_reaction, Reaction, ReactionChange, ReactionKind};
pub use user::User;
