//! Reaction entity and the like/dislike state machine
//!
//! A user holds one of three states for a post: no reaction, liked, or
//! disliked. The transition table below is the single source of truth for the
//! `like_count` deltas; it is evaluated inside the store transaction that
//! applies the change.

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// A user's like-or-dislike row for a post. At most one row per (user, post);
/// the row is mutated in place when the reaction flips, never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub post_id: Snowflake,
    pub is_like: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    pub fn new(id: Snowflake, user_id: Snowflake, post_id: Snowflake, is_like: bool) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            post_id,
            is_like,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The reaction a caller wants to hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    #[inline]
    pub fn is_like(self) -> bool {
        matches!(self, Self::Like)
    }
}

/// The mutation a reaction transition requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionChange {
    /// No existing row: insert one and shift `like_count` by `delta`
    Create { is_like: bool, delta: i64 },
    /// Existing row with the opposite value: flip it in place. The delta is
    /// +/-2 because the old reaction is retracted and the new one applied in
    /// a single update.
    Flip { is_like: bool, delta: i64 },
}

impl ReactionChange {
    /// The `like_count` adjustment this change carries
    pub fn delta(self) -> i64 {
        match self {
            Self::Create { delta, .. } | Self::Flip { delta, .. } => delta,
        }
    }
}

/// Evaluate the reaction state machine.
///
/// `current` is the existing row's `is_like` value, or `None` when the user
/// has no reaction on the post. All six transitions are spelled out so the
/// deltas stay auditable:
///
/// | current   | desired | result                         |
/// |-----------|---------|--------------------------------|
/// | none      | like    | create like,    delta +1       |
/// | none      | dislike | create dislike, delta -1       |
/// | liked     | like    | error AlreadyLiked             |
/// | liked     | dislike | flip to dislike, delta -2      |
/// | disliked  | dislike | error AlreadyDisliked          |
/// | disliked  | like    | flip to like,   delta +2       |
pub fn plan_reaction(
    current: Option<bool>,
    desired: ReactionKind,
) -> Result<ReactionChange, DomainError> {
    match (current, desired) {
        (None, ReactionKind::Like) => Ok(ReactionChange::Create {
            is_like: true,
            delta: 1,
        }),
        (None, ReactionKind::Dislike) => Ok(ReactionChange::Create {
            is_like: false,
            delta: -1,
        }),
        (Some(true), ReactionKind::Like) => Err(DomainError::AlreadyLiked),
        (Some(true), ReactionKind::Dislike) => Ok(ReactionChange::Flip {
            is_like: false,
            delta: -2,
        }),
        (Some(false), ReactionKind::Dislike) => Err(DomainError::AlreadyDisliked),
        (Some(false), ReactionKind::Like) => Ok(ReactionChange::Flip {
            is_like: true,
            delta: 2,
        }),
    }
}
