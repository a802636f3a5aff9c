//! Delete Account Use Case
//!
//! Code-gated removal of a user together with every record it owns.

use std::sync::Arc;

use crate::application::use_cases::users::verify_code::CodeVerifier;
use crate::domain::gateways::UserRepository;
use crate::domain::models::user::DeleteAccountData;
use crate::shared::errors::UseCaseError;

/// Use case for deleting the caller's account
pub struct DeleteAccountUseCase {
    user_repository: Arc<dyn UserRepository>,
    codes: CodeVerifier,
}

impl DeleteAccountUseCase {
    #[must_use]
    pub(crate) fn new(user_repository: Arc<dyn UserRepository>, codes: CodeVerifier) -> Self {
        Self {
            user_repository,
            codes,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::UserNotFound` if the caller no longer exists.
    /// Returns `UseCaseError::Validation` if the email is not the caller's.
    /// Returns `UseCaseError::VerifyCodeInvalid` if the code does not match.
    pub async fn execute(&self, data: DeleteAccountData) -> Result<(), UseCaseError> {
        tracing::info!(uid = %data.uid, "Deleting account");

        let Some(user) = self.user_repository.find_by_id(data.uid).await? else {
            return Err(UseCaseError::UserNotFound(data.uid.to_string()));
        };
        if !user.owns_email(&data.email) {
            tracing::warn!(uid = %data.uid, "Account deletion with foreign email");
            return Err(UseCaseError::Validation(vec![
                "email: does not belong to the current user".to_string(),
            ]));
        }

        self.codes.check(&data.email, &data.code).await?;

        if !self.user_repository.delete_account(data.uid).await? {
            return Err(UseCaseError::UserNotFound(data.uid.to_string()));
        }

        self.codes.consume(&data.email).await;
        tracing::info!(uid = %data.uid, "Account and owned data deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{test_user, uid, UID};
    use crate::domain::gateways::user_repository::MockUserRepository;
    use crate::domain::gateways::verify_code_store::MockVerifyCodeStore;

    fn delete_data(email: &str, code: &str) -> DeleteAccountData {
        DeleteAccountData {
            uid: uid(),
            email: email.to_string(),
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

    fn users_with_dave() -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_user(id.value(), "dave@example.com"))));
        users
    }

    #[tokio::test]
    async fn should_delete_account_with_valid_code() {
        let mut users = users_with_dave();
        users
            .expect_delete_account()
            .withf(|id| id.value() == UID)
            .times(1)
            .returning(|_| Ok(true));

        let use_case = DeleteAccountUseCase::new(Arc::new(users), codes("333333"));
        assert!(use_case
            .execute(delete_data("dave@example.com", "333333"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn should_reject_foreign_email() {
        let mut users = users_with_dave();
        users.expect_delete_account().never();

        let use_case = DeleteAccountUseCase::new(
            Arc::new(users),
            CodeVerifier::new(Arc::new(MockVerifyCodeStore::new())),
        );
        let result = use_case.execute(delete_data("eve@example.com", "333333")).await;

        assert!(matches!(result, Err(UseCaseError::Validation(_))));
    }

    #[tokio::test]
    async fn should_reject_wrong_code() {
        let mut users = users_with_dave();
        users.expect_delete_account().never();

        let use_case = DeleteAccountUseCase::new(Arc::new(users), codes("333333"));
        let result = use_case.execute(delete_data("dave@example.com", "000000")).await;

        assert!(matches!(result, Err(UseCaseError::VerifyCodeInvalid(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let use_case = DeleteAccountUseCase::new(
            Arc::new(users),
            CodeVerifier::new(Arc::new(MockVerifyCodeStore::new())),
        );
        let result = use_case.execute(delete_data("dave@example.com", "333333")).await;

        assert!(matches!(result, Err(UseCaseError::UserNotFound(_))));
    }
}
