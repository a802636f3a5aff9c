//! Redis backed verification code store
//!
//! Codes are written with `SET EX` so redis expires them on its own.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use super::code_key;
use crate::domain::gateways::VerifyCodeStore;
use crate::shared::errors::GatewayError;

#[derive(Clone)]
pub struct RedisVerifyCodeStore {
    connection: ConnectionManager,
}

impl RedisVerifyCodeStore {
    #[must_use]
    pub fn new(connection: ConnectionManager) -> Self {
        Self { connection }
    }

    /// Open a managed connection to the given redis URL
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Cache` if the URL is invalid or the server is unreachable.
    pub async fn connect(url: &str) -> Result<Self, GatewayError> {
        let client = redis::Client::open(url).map_err(cache_error)?;
        let connection = ConnectionManager::new(client).await.map_err(cache_error)?;
        Ok(Self::new(connection))
    }
}

fn cache_error(err: redis::RedisError) -> GatewayError {
    GatewayError::Cache(err.to_string())
}

#[async_trait]
impl VerifyCodeStore for RedisVerifyCodeStore {
    async fn save(&self, email: &str, code: &str, ttl: Duration) -> Result<(), GatewayError> {
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(code_key(email), code, ttl.as_secs().max(1))
            .await
            .map_err(cache_error)
    }

    async fn get(&self, email: &str) -> Result<Option<String>, GatewayError> {
        let mut conn = self.connection.clone();
        conn.get::<_, Option<String>>(code_key(email))
            .await
            .map_err(cache_error)
    }

    async fn remove(&self, email: &str) -> Result<(), GatewayError> {
        let mut conn = self.connection.clone();
        conn.del::<_, ()>(code_key(email)).await.map_err(cache_error)
    }
}
