//! Session storage

mod store;

pub use store::{SessionData, SessionStore};
