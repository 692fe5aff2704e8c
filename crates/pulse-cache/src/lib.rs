//! # pulse-cache
//!
//! Redis caching layer for server-side sessions.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Opaque session tokens with automatic expiration
//!
//! ## Example
//!
//! ```ignore
//! use pulse_cache::{RedisPool, RedisPoolConfig, SessionStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let sessions = SessionStore::new(pool.clone());
//!
//! let token = sessions.create(user_id).await?;
//! let data = sessions.get(&token).await?;
//! ```

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export session types
pub use session::{SessionData, SessionStore};
