//! Forgot Password Use Case
//!
//! Replaces the password of an account after checking the emailed code.

use std::sync::Arc;

use crate::application::use_cases::users::verify_code::CodeVerifier;
use crate::domain::gateways::{PasswordHasher, UserRepository};
use crate::domain::models::user::ResetPasswordData;
use crate::shared::errors::UseCaseError;

/// Use case for resetting a forgotten password
pub struct ForgotPasswordUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    codes: CodeVerifier,
}

impl ForgotPasswordUseCase {
    #[must_use]
    pub(crate) fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        codes: CodeVerifier,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            codes,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::UserNotFound` if no account uses the email.
    /// Returns `UseCaseError::VerifyCodeInvalid` if the code does not match.
    /// Returns `UseCaseError::PasswordResetFailed` if the update fails.
    pub async fn execute(&self, data: ResetPasswordData) -> Result<(), UseCaseError> {
        tracing::info!(email = %data.email, "Resetting password");

        if !self.user_repository.exists_by_email(&data.email).await? {
            tracing::warn!(email = %data.email, "Password reset for unknown user");
            return Err(UseCaseError::UserNotFound(data.email));
        }

        self.codes.check(&data.email, &data.code).await?;

        let password_hash = self.password_hasher.hash(&data.password)?;
        let updated = self
            .user_repository
            .update_password(&data.email, &password_hash)
            .await
            .map_err(UseCaseError::PasswordResetFailed)?;
        if !updated {
            return Err(UseCaseError::UserNotFound(data.email));
        }

        self.codes.consume(&data.email).await;
        tracing::info!(email = %data.email, "Password reset successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::security::MockPasswordHasher;
    use crate::domain::gateways::user_repository::MockUserRepository;
    use crate::domain::gateways::verify_code_store::MockVerifyCodeStore;
    use crate::shared::errors::RepositoryError;
    use zeroize::Zeroizing;

    fn reset_data(code: &str) -> ResetPasswordData {
        ResetPasswordData {
            email: "carol@example.com".to_string(),
            password: Zeroizing::new("new-password".to_string()),
            code: code.to_string(),
        }
    }

    fn codes(stored: &'static str) -> CodeVerifier {
        let mut store = MockVerifyCodeStore::new();
        store
            .expect_get()
            .returning(move |_| Ok(Some(stored.to_string())));
        store.expect_remove().returning(|_| Ok(()));
        CodeVerifier::new(Arc::new(store))
    }

    fn hasher() -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().returning(|_| Ok("rehashed".to_string()));
        hasher
    }

    #[tokio::test]
    async fn should_update_password_with_new_hash() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_email().returning(|_| Ok(true));
        users
            .expect_update_password()
            .withf(|email, hash| email == "carol@example.com" && hash == "rehashed")
            .times(1)
            .returning(|_, _| Ok(true));

        let use_case = ForgotPasswordUseCase::new(Arc::new(users), Arc::new(hasher()), codes("111111"));
        assert!(use_case.execute(reset_data("111111")).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_user_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_email().returning(|_| Ok(false));

        let use_case = ForgotPasswordUseCase::new(
            Arc::new(users),
            Arc::new(MockPasswordHasher::new()),
            CodeVerifier::new(Arc::new(MockVerifyCodeStore::new())),
        );
        let result = use_case.execute(reset_data("111111")).await;

        assert!(matches!(result, Err(UseCaseError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn should_return_code_invalid() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_email().returning(|_| Ok(true));
        users.expect_update_password().never();

        let use_case = ForgotPasswordUseCase::new(Arc::new(users), Arc::new(hasher()), codes("222222"));
        let result = use_case.execute(reset_data("111111")).await;

        assert!(matches!(result, Err(UseCaseError::VerifyCodeInvalid(_))));
    }

    #[tokio::test]
    async fn should_return_reset_failed_when_update_errors() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_email().returning(|_| Ok(true));
        users
            .expect_update_password()
            .returning(|_, _| Err(RepositoryError::Mapping("write failed".into())));

        let use_case = ForgotPasswordUseCase::new(Arc::new(users), Arc::new(hasher()), codes("111111"));
        let result = use_case.execute(reset_data("111111")).await;

        assert!(matches!(result, Err(UseCaseError::PasswordResetFailed(_))));
    }
}
