//! Send Verification Code Use Case
//!
//! Generates a six digit code, stores it with a TTL and mails it.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::domain::gateways::{MailMessage, Mailer, VerifyCodeStore};
use crate::shared::errors::UseCaseError;

const CODE_SUBJECT: &str = "Your CRM verification code";

/// Use case for issuing a verification code by email
pub struct SendVerifyCodeUseCase {
    code_store: Arc<dyn VerifyCodeStore>,
    mailer: Arc<dyn Mailer>,
    ttl: Duration,
}

impl SendVerifyCodeUseCase {
    /// Create a new SendVerifyCodeUseCase
    #[must_use]
    pub fn new(code_store: Arc<dyn VerifyCodeStore>, mailer: Arc<dyn Mailer>, ttl: Duration) -> Self {
        Self {
            code_store,
            mailer,
            ttl,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Gateway` if the code cannot be stored.
    /// Returns `UseCaseError::VerifyCodeSendFailed` if the mail cannot be delivered.
    pub async fn execute(&self, email: &str) -> Result<(), UseCaseError> {
        let code = generate_code();
        tracing::info!(email = %email, "Issuing verification code");

        self.code_store.save(email, &code, self.ttl).await?;

        let message = MailMessage {
            to: email.to_string(),
            subject: CODE_SUBJECT.to_string(),
            body: format!(
                "Your verification code is {code}. It expires in {} minutes. Never share it with anyone.",
                self.ttl.as_secs().div_ceil(60)
            ),
        };
        self.mailer.send(&message).await.map_err(|e| {
            tracing::warn!(email = %email, error = %e, "Verification mail not delivered");
            UseCaseError::VerifyCodeSendFailed(e)
        })?;

        Ok(())
    }
}

/// Random six digit numeric code
fn generate_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::mailer::MockMailer;
    use crate::domain::gateways::verify_code_store::MockVerifyCodeStore;
    use crate::shared::errors::GatewayError;
    use std::sync::Mutex;

    const TTL: Duration = Duration::from_secs(300);

    #[test]
    fn test_generated_code_has_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[tokio::test]
    async fn should_store_and_mail_the_same_code() {
        let stored = Arc::new(Mutex::new(String::new()));

        let mut store = MockVerifyCodeStore::new();
        let sink = stored.clone();
        store
            .expect_save()
            .withf(|email, _, ttl| email == "bob@example.com" && *ttl == TTL)
            .times(1)
            .returning(move |_, code, _| {
                *sink.lock().unwrap() = code.to_string();
                Ok(())
            });

        let mut mailer = MockMailer::new();
        let expected = stored.clone();
        mailer
            .expect_send()
            .withf(move |m| {
                m.to == "bob@example.com" && m.body.contains(expected.lock().unwrap().as_str())
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = SendVerifyCodeUseCase::new(Arc::new(store), Arc::new(mailer), TTL);
        tokio_test::assert_ok!(use_case.execute("bob@example.com").await);
        assert_eq!(stored.lock().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn should_return_send_failed_when_mail_fails() {
        let mut store = MockVerifyCodeStore::new();
        store.expect_save().returning(|_, _, _| Ok(()));

        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .returning(|_| Err(GatewayError::Mail("502 Bad Gateway".into())));

        let use_case = SendVerifyCodeUseCase::new(Arc::new(store), Arc::new(mailer), TTL);
        let result = use_case.execute("bob@example.com").await;

        assert!(matches!(result, Err(UseCaseError::VerifyCodeSendFailed(_))));
    }

    #[tokio::test]
    async fn should_not_mail_when_store_fails() {
        let mut store = MockVerifyCodeStore::new();
        store
            .expect_save()
            .returning(|_, _, _| Err(GatewayError::Cache("down".into())));

        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let use_case = SendVerifyCodeUseCase::new(Arc::new(store), Arc::new(mailer), TTL);
        let result = use_case.execute("bob@example.com").await;

        assert!(matches!(result, Err(UseCaseError::Gateway(_))));
    }
}
