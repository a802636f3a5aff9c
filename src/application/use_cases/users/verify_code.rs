//! Verification code checks shared by the code-gated user use cases.

use std::sync::Arc;

use crate::domain::gateways::VerifyCodeStore;
use crate::shared::errors::UseCaseError;

/// Compares submitted codes against the store and invalidates used ones
#[derive(Clone)]
pub(crate) struct CodeVerifier {
    store: Arc<dyn VerifyCodeStore>,
}

impl CodeVerifier {
    pub(crate) fn new(store: Arc<dyn VerifyCodeStore>) -> Self {
        Self { store }
    }

    /// Succeeds only when a code was issued for the email and matches
    pub(crate) async fn check(&self, email: &str, code: &str) -> Result<(), UseCaseError> {
        match self.store.get(email).await? {
            Some(stored) if stored == code.trim() => Ok(()),
            Some(_) => {
                tracing::warn!(email = %email, "Verification code mismatch");
                Err(UseCaseError::VerifyCodeInvalid(email.to_string()))
            }
            None => {
                tracing::warn!(email = %email, "No verification code issued or code expired");
                Err(UseCaseError::VerifyCodeInvalid(email.to_string()))
            }
        }
    }

    /// Remove a used code; failures are logged since the operation already succeeded
    pub(crate) async fn consume(&self, email: &str) {
        if let Err(e) = self.store.remove(email).await {
            tracing::warn!(email = %email, error = %e, "Failed to invalidate verification code");
        }
    }
}
