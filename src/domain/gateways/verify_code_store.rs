//! Verification Code Store Gateway
//!
//! Short-lived storage for the numeric codes mailed to users.

use std::time::Duration;

use async_trait::async_trait;

use crate::shared::errors::GatewayError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerifyCodeStore: Send + Sync {
    /// Store the code for the email, replacing any previous one
    async fn save(&self, email: &str, code: &str, ttl: Duration) -> Result<(), GatewayError>;

    /// Current code for the email, if one was issued and has not expired
    async fn get(&self, email: &str) -> Result<Option<String>, GatewayError>;

    /// Invalidate the code once it has been used
    async fn remove(&self, email: &str) -> Result<(), GatewayError>;
}
