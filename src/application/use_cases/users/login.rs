//! Login Use Case
//!
//! Verifies credentials and issues a session token.

use std::sync::Arc;

use crate::application::use_cases::users::record_notice;
use crate::domain::gateways::{NoticeRepository, PasswordHasher, TokenService, UserRepository};
use crate::domain::models::notice::LOGIN_NOTICE;
use crate::domain::models::user::{Credentials, Session};
use crate::shared::errors::UseCaseError;

/// Use case for logging a user in
pub struct LoginUseCase {
    user_repository: Arc<dyn UserRepository>,
    notice_repository: Arc<dyn NoticeRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
}

impl LoginUseCase {
    /// Create a new LoginUseCase
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        notice_repository: Arc<dyn NoticeRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_repository,
            notice_repository,
            password_hasher,
            token_service,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::UserNotFound` if no account uses the email.
    /// Returns `UseCaseError::InvalidCredentials` if the password does not match.
    pub async fn execute(&self, credentials: Credentials) -> Result<Session, UseCaseError> {
        tracing::info!(email = %credentials.email, "User login attempt");

        let Some(user) = self.user_repository.find_by_email(&credentials.email).await? else {
            tracing::warn!(email = %credentials.email, "Login for unknown user");
            return Err(UseCaseError::UserNotFound(credentials.email));
        };

        if !self
            .password_hasher
            .verify(&credentials.password, user.password_hash())?
        {
            tracing::warn!(uid = %user.id(), "Login with wrong password");
            return Err(UseCaseError::InvalidCredentials);
        }

        let token = self.token_service.issue(user.id())?;
        record_notice(self.notice_repository.as_ref(), user.id(), LOGIN_NOTICE).await;

        tracing::info!(uid = %user.id(), "User logged in");
        Ok(Session {
            uid: user.id(),
            token,
        })
    }
}
