//! In-process verification code store
//!
//! Used when no redis is configured (local runs, end-to-end tests).
//! Expired entries are dropped lazily on read.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::code_key;
use crate::domain::gateways::VerifyCodeStore;
use crate::shared::errors::GatewayError;

#[derive(Default)]
pub struct InMemoryVerifyCodeStore {
    codes: Mutex<HashMap<String, (String, Instant)>>,
}

impl InMemoryVerifyCodeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VerifyCodeStore for InMemoryVerifyCodeStore {
    async fn save(&self, email: &str, code: &str, ttl: Duration) -> Result<(), GatewayError> {
        self.codes
            .lock()
            .await
            .insert(code_key(email), (code.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<String>, GatewayError> {
        let key = code_key(email);
        let mut codes = self.codes.lock().await;
        match codes.get(&key) {
            Some((code, expires_at)) if *expires_at > Instant::now() => Ok(Some(code.clone())),
            Some(_) => {
                codes.remove(&key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, email: &str) -> Result<(), GatewayError> {
        self.codes.lock().await.remove(&code_key(email));
        Ok(())
    }
}
