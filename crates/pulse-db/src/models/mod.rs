//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod poll;
mod post;
mod reaction;
mod user;

pub use comment::{CommentModel, CommentWithAuthorModel};
pub use poll::{PollOptionModel, PollWithOwnerModel};
pub use post::PostModel;
pub use reaction::ReactionModel;
pub use user::UserModel;
