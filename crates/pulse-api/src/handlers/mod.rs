//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod comments;
pub mod health;
pub mod polls;
pub mod posts;
pub mod reactions;
pub mod users;
