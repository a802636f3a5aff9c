//! Mailer Gateway

use async_trait::async_trait;

use crate::shared::errors::GatewayError;

/// An outbound plain text email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<(), GatewayError>;
}
