//! File Storage Gateway

use async_trait::async_trait;

use crate::shared::errors::GatewayError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Write the bytes under the given (already generated) name
    async fn store(&self, name: &str, bytes: &[u8]) -> Result<(), GatewayError>;

    /// Remove a stored file by name
    async fn remove(&self, name: &str) -> Result<(), GatewayError>;

    /// Public URL under which a stored file is served
    fn url_for(&self, name: &str) -> String;
}
