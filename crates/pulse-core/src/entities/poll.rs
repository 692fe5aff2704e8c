//! Poll entities - poll, its options, and the vote ledger

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// A titled question owned by a user, with at least two options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Poll {
    pub fn new(id: Snowflake, user_id: Snowflake, title: String) -> Self {
        Self {
            id,
            user_id,
            title,
            created_at: Utc::now(),
        }
    }
}

/// One selectable option of a poll
///
/// `vote_count` is non-negative and mutated only by the vote flow, inside the
/// same transaction that inserts the PollVote row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOption {
    pub id: Snowflake,
    pub poll_id: Snowflake,
    pub text: String,
    pub vote_count: i64,
    /// Display order within the poll
    pub position: i32,
}

impl PollOption {
    pub fn new(id: Snowflake, poll_id: Snowflake, text: String, position: i32) -> Self {
        Self {
            id,
            poll_id,
            text,
            vote_count: 0,
            position,
        }
    }
}

/// A user's vote on a poll. At most one row per (user, poll); rows are
/// created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollVote {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub poll_id: Snowflake,
    pub option_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl PollVote {
    pub fn new(id: Snowflake, user_id: Snowflake, poll_id: Snowflake, option_id: Snowflake) -> Self {
        Self {
            id,
            user_id,
            poll_id,
            option_id,
            created_at: Utc::now(),
        }
    }
}

/// A poll together with its owner's username and its options, ordered by
/// position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollWithOptions {
    pub poll: Poll,
    /// Username of the poll owner, joined in by the repository
    pub username: String,
    pub options: Vec<PollOption>,
}

impl PollWithOptions {
    /// Sum of vote counts across all options
    pub fn total_votes(&self) -> i64 {
        self.options.iter().map(|o| o.vote_count).sum()
    }
}

/// Validate the option texts of a new poll: at least two, non-empty, unique
pub fn validate_poll_options(texts: &[String]) -> Result<(), DomainError> {
    if texts.len() < 2 {
        return Err(DomainError::ValidationError(
            "A poll needs at least two options".to_string(),
        ));
    }
    if texts.iter().any(|t| t.trim().is_empty()) {
        return Err(DomainError::ValidationError(
            "Poll options must not be empty".to_string(),
        ));
    }
    let mut seen = std::collections::HashSet::new();
    if !texts.iter().all(|t| seen.insert(t.trim())) {
        return Err(DomainError::DuplicatePollOptions);
    }
    Ok(())
}
