//! Register User Use Case
//!
//! Creates an account after checking the emailed verification code, assigns
//! the free subscription and records a welcome notice.

use std::sync::Arc;

use crate::application::use_cases::on_duplicate;
use crate::application::use_cases::users::record_notice;
use crate::application::use_cases::users::verify_code::CodeVerifier;
use crate::domain::gateways::{
    NoticeRepository, PasswordHasher, SubscriptionRepository, UserRepository,
};
use crate::domain::models::notice::REGISTER_NOTICE;
use crate::domain::models::subscription::Subscription;
use crate::domain::models::user::{RegisterUserData, UserId};
use crate::shared::errors::UseCaseError;

/// Use case for registering a new user
pub struct RegisterUseCase {
    user_repository: Arc<dyn UserRepository>,
    subscription_repository: Arc<dyn SubscriptionRepository>,
    notice_repository: Arc<dyn NoticeRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    codes: CodeVerifier,
}

impl RegisterUseCase {
    /// Create a new RegisterUseCase
    #[must_use]
    pub(crate) fn new(
        user_repository: Arc<dyn UserRepository>,
        subscription_repository: Arc<dyn SubscriptionRepository>,
        notice_repository: Arc<dyn NoticeRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        codes: CodeVerifier,
    ) -> Self {
        Self {
            user_repository,
            subscription_repository,
            notice_repository,
            password_hasher,
            codes,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::UserExists` if the email is already registered.
    /// Returns `UseCaseError::VerifyCodeInvalid` if the code does not match.
    /// Returns `UseCaseError::Repository` or `UseCaseError::Gateway` on infrastructure failures.
    pub async fn execute(&self, data: RegisterUserData) -> Result<UserId, UseCaseError> {
        tracing::info!(email = %data.email, "Registering new user");

        if self.user_repository.exists_by_email(&data.email).await? {
            tracing::warn!(email = %data.email, "User already exists");
            return Err(UseCaseError::UserExists(data.email));
        }

        self.codes.check(&data.email, &data.code).await?;

        let password_hash = self.password_hasher.hash(&data.password)?;
        let user = self
            .user_repository
            .create(&data.email, &password_hash)
            .await
            .map_err(|e| on_duplicate(e, || UseCaseError::UserExists(data.email.clone())))?;
        let uid = user.id();

        // New accounts start on the free plan
        let subscription = Subscription::free(uid);
        if self.subscription_repository.exists(uid).await? {
            self.subscription_repository.update(&subscription).await?;
        } else {
            self.subscription_repository.create(&subscription).await?;
        }

        self.codes.consume(&data.email).await;
        record_notice(self.notice_repository.as_ref(), uid, REGISTER_NOTICE).await;

        tracing::info!(uid = %uid, email = %data.email, "User registered successfully");
        Ok(uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{test_notice, test_user};
    use crate::domain::gateways::notice_repository::MockNoticeRepository;
    use crate::domain::gateways::security::MockPasswordHasher;
    use crate::domain::gateways::subscription_repository::MockSubscriptionRepository;
    use crate::domain::gateways::user_repository::MockUserRepository;
    use crate::domain::gateways::verify_code_store::MockVerifyCodeStore;
    use crate::domain::models::subscription::FREE_VERSION;
    use crate::shared::errors::RepositoryError;
    use zeroize::Zeroizing;

    const EMAIL: &str = "alice@example.com";

    fn register_data(code: &str) -> RegisterUserData {
        RegisterUserData {
            email: EMAIL.to_string(),
            password: Zeroizing::new("s3cret-pass".to_string()),
            code: code.to_string(),
        }
    }

    fn code_store(stored: &'static str) -> MockVerifyCodeStore {
        let mut store = MockVerifyCodeStore::new();
        store
            .expect_get()
            .returning(move |_| Ok(Some(stored.to_string())));
        store.expect_remove().returning(|_| Ok(()));
        store
    }

    fn hasher() -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .withf(|password| password == "s3cret-pass")
            .returning(|_| Ok("hashed".to_string()));
        hasher
    }

    fn notices() -> MockNoticeRepository {
        let mut notices = MockNoticeRepository::new();
        notices
            .expect_create()
            .withf(|_, content| content == REGISTER_NOTICE)
            .times(1)
            .returning(|uid, content| Ok(test_notice(uid, content)));
        notices
    }

    fn use_case(
        users: MockUserRepository,
        subscriptions: MockSubscriptionRepository,
        notices: MockNoticeRepository,
        store: MockVerifyCodeStore,
    ) -> RegisterUseCase {
        RegisterUseCase::new(
            Arc::new(users),
            Arc::new(subscriptions),
            Arc::new(notices),
            Arc::new(hasher()),
            CodeVerifier::new(Arc::new(store)),
        )
    }

    #[tokio::test]
    async fn should_register_and_create_free_subscription() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_email().returning(|_| Ok(false));
        users
            .expect_create()
            .withf(|email, hash| email == EMAIL && hash == "hashed")
            .returning(|email, _| Ok(test_user(11, email)));

        let mut subscriptions = MockSubscriptionRepository::new();
        subscriptions.expect_exists().returning(|_| Ok(false));
        subscriptions
            .expect_create()
            .withf(|s| s.uid == UserId::new(11) && s.version == FREE_VERSION)
            .times(1)
            .returning(|_| Ok(()));
        subscriptions.expect_update().never();

        let use_case = use_case(users, subscriptions, notices(), code_store("123456"));
        let uid = use_case.execute(register_data("123456")).await.unwrap();

        assert_eq!(uid, UserId::new(11));
    }

    #[tokio::test]
    async fn should_update_existing_subscription_row() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_email().returning(|_| Ok(false));
        users
            .expect_create()
            .returning(|email, _| Ok(test_user(12, email)));

        let mut subscriptions = MockSubscriptionRepository::new();
        subscriptions.expect_exists().returning(|_| Ok(true));
        subscriptions.expect_create().never();
        subscriptions
            .expect_update()
            .times(1)
            .returning(|_| Ok(true));

        let use_case = use_case(users, subscriptions, notices(), code_store("123456"));
        assert!(use_case.execute(register_data("123456")).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_user_exists_when_email_taken() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_email().returning(|_| Ok(true));
        users.expect_create().never();

        let use_case = use_case(
            users,
            MockSubscriptionRepository::new(),
            MockNoticeRepository::new(),
            MockVerifyCodeStore::new(),
        );
        let result = use_case.execute(register_data("123456")).await;

        assert!(matches!(result, Err(UseCaseError::UserExists(_))));
    }

    #[tokio::test]
    async fn should_return_code_invalid_when_code_mismatches() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_email().returning(|_| Ok(false));
        users.expect_create().never();

        let use_case = use_case(
            users,
            MockSubscriptionRepository::new(),
            MockNoticeRepository::new(),
            code_store("999999"),
        );
        let result = use_case.execute(register_data("123456")).await;

        assert!(matches!(result, Err(UseCaseError::VerifyCodeInvalid(_))));
    }

    #[tokio::test]
    async fn should_succeed_even_if_notice_fails() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_email().returning(|_| Ok(false));
        users
            .expect_create()
            .returning(|email, _| Ok(test_user(13, email)));

        let mut subscriptions = MockSubscriptionRepository::new();
        subscriptions.expect_exists().returning(|_| Ok(false));
        subscriptions.expect_create().returning(|_| Ok(()));

        let mut notices = MockNoticeRepository::new();
        notices
            .expect_create()
            .returning(|_, _| Err(RepositoryError::Mapping("broken".into())));

        let use_case = use_case(users, subscriptions, notices, code_store("123456"));
        assert!(use_case.execute(register_data("123456")).await.is_ok());
    }

    #[tokio::test]
    async fn should_fail_when_insert_fails() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_email().returning(|_| Ok(false));
        users
            .expect_create()
            .returning(|_, _| Err(RepositoryError::Mapping("insert failed".into())));

        let use_case = use_case(
            users,
            MockSubscriptionRepository::new(),
            MockNoticeRepository::new(),
            code_store("123456"),
        );
        let result = use_case.execute(register_data("123456")).await;

        assert!(matches!(result, Err(UseCaseError::Repository(_))));
    }

    #[tokio::test]
    async fn should_return_user_exists_when_insert_hits_unique_constraint() {
        let mut users = MockUserRepository::new();
        users.expect_exists_by_email().returning(|_| Ok(false));
        users
            .expect_create()
            .returning(|_, _| Err(RepositoryError::Duplicate("users_email_key".into())));

        let use_case = use_case(
            users,
            MockSubscriptionRepository::new(),
            MockNoticeRepository::new(),
            code_store("123456"),
        );
        let result = use_case.execute(register_data("123456")).await;

        assert!(matches!(result, Err(UseCaseError::UserExists(email)) if email == EMAIL));
    }
}
