//! HTTP mail API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::domain::gateways::{MailMessage, Mailer};
use crate::shared::errors::GatewayError;

/// Request body accepted by the mail API
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}

pub struct HttpMailer {
    http_client: Client,
    api_url: String,
    sender: String,
    api_token: String,
}

impl HttpMailer {
    /// # Errors
    ///
    /// Returns `GatewayError::Mail` if the HTTP client cannot be built.
    pub fn new(
        api_url: String,
        sender: String,
        api_token: String,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Mail(e.to_string()))?;

        Ok(Self {
            http_client,
            api_url,
            sender,
            api_token,
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), GatewayError> {
        let body = SendEmailRequest {
            from: &self.sender,
            to: &message.to,
            subject: &message.subject,
            text_body: &message.body,
        };

        let mut request = self.http_client.post(&self.api_url).json(&body);
        if !self.api_token.is_empty() {
            request = request.bearer_auth(&self.api_token);
        }

        request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| GatewayError::Mail(e.to_string()))?;

        tracing::debug!(to = %message.to, "Mail accepted by API");
        Ok(())
    }
}
