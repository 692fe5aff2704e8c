//! Server-side session storage in Redis.
//!
//! Sessions are identified by an opaque random token handed to the client in
//! a cookie. The token maps to session data with a sliding TTL.

use crate::pool::{RedisPool, RedisResult};
use pulse_core::Snowflake;
use rand::RngCore;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Key prefix for sessions
const SESSION_PREFIX: &str = "session:";

/// Default session TTL (7 days)
const DEFAULT_SESSION_TTL: u64 = 7 * 24 * 60 * 60;

/// Number of random bytes in a session token (hex-encoded to 64 chars)
const TOKEN_BYTES: usize = 32;

/// Stored session data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// User this session belongs to
    pub user_id: Snowflake,
    /// Session creation timestamp (Unix epoch seconds)
    pub created_at: i64,
    /// Client user agent at login (optional)
    pub user_agent: Option<String>,
    /// IP address at login (optional)
    pub ip_address: Option<String>,
}

impl SessionData {
    #[must_use]
    pub fn new(user_id: Snowflake) -> Self {
        Self {
            user_id,
            created_at: chrono::Utc::now().timestamp(),
            user_agent: None,
            ip_address: None,
        }
    }

    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    #[must_use]
    pub fn with_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }
}

/// Session store backing cookie-based authentication
#[derive(Clone)]
pub struct SessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl SessionStore {
    /// Create a new session store with the default TTL
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_SESSION_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate Redis key for a session token
    fn key(token: &str) -> String {
        format!("{SESSION_PREFIX}{token}")
    }

    /// Generate a fresh opaque session token
    fn generate_token() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        let mut token = String::with_capacity(TOKEN_BYTES * 2);
        for b in bytes {
            let _ = write!(token, "{b:02x}");
        }
        token
    }

    /// Create a new session for a user, returning the token
    pub async fn create(&self, data: &SessionData) -> RedisResult<String> {
        let token = Self::generate_token();
        let key = Self::key(&token);
        self.pool.set(&key, data, Some(self.ttl_seconds)).await?;

        // Track the user's sessions so they can all be revoked on logout
        let user_set_key = format!("user_sessions:{}", data.user_id);
        let mut conn = self.pool.get().await?;
        conn.sadd::<_, _, ()>(&user_set_key, &token).await?;
        conn.expire::<_, ()>(&user_set_key, self.ttl_seconds as i64).await?;

        tracing::debug!(user_id = %data.user_id, "Created session");

        Ok(token)
    }

    /// Look up session data for a token
    pub async fn get(&self, token: &str) -> RedisResult<Option<SessionData>> {
        let key = Self::key(token);
        self.pool.get_value(&key).await
    }

    /// Look up a session and extend its TTL (sliding expiration)
    pub async fn get_and_touch(&self, token: &str) -> RedisResult<Option<SessionData>> {
        let key = Self::key(token);
        let data: Option<SessionData> = self.pool.get_value(&key).await?;
        if data.is_some() {
            self.pool.expire(&key, self.ttl_seconds as i64).await?;
        }
        Ok(data)
    }

    /// Revoke (delete) a session
    pub async fn revoke(&self, token: &str) -> RedisResult<bool> {
        if let Some(data) = self.get(token).await? {
            let user_set_key = format!("user_sessions:{}", data.user_id);
            let mut conn = self.pool.get().await?;
            conn.srem::<_, _, ()>(&user_set_key, token).await?;
        }

        let deleted = self.pool.delete(&Self::key(token)).await?;

        if deleted {
            tracing::debug!("Revoked session");
        }

        Ok(deleted)
    }

    /// Revoke all sessions for a user (logout from all devices)
    pub async fn revoke_all_for_user(&self, user_id: Snowflake) -> RedisResult<u32> {
        let user_set_key = format!("user_sessions:{user_id}");
        let mut conn = self.pool.get().await?;

        let tokens: Vec<String> = conn.smembers(&user_set_key).await?;
        let count = tokens.len() as u32;

        if !tokens.is_empty() {
            let keys: Vec<String> = tokens.iter().map(|t| Self::key(t)).collect();
            let keys_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
            self.pool.delete_many(&keys_refs).await?;
        }

        conn.del::<_, ()>(&user_set_key).await?;

        tracing::info!(user_id = %user_id, count = count, "Revoked all sessions for user");

        Ok(count)
    }

    /// Get remaining TTL for a session
    pub async fn get_ttl(&self, token: &str) -> RedisResult<Option<i64>> {
        self.pool.ttl(&Self::key(token)).await
    }
}
