//! Mailer Adapters
//!
//! `HttpMailer` posts to a transactional mail API; `LogMailer` only logs and
//! is selected with `mail.enabled = false`.

mod http;

pub use http::HttpMailer;

use async_trait::async_trait;

use crate::domain::gateways::{MailMessage, Mailer};
use crate::shared::errors::GatewayError;

/// Mailer that writes messages to the log instead of delivering them
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), GatewayError> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            body = %message.body,
            "Mail delivery disabled, message logged"
        );
        Ok(())
    }
}
