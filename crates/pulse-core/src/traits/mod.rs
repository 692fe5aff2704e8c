pub mod repositories;

pub use repositories::{
    CommentRepository, CommentWithAuthor, PollRepository, PostRepository, ReactionOutcome,
    ReactionRepository, RepoResult, UserRepository,
};
