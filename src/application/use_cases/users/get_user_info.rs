//! Get User Info Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{UserId, UserProfile};
use crate::shared::errors::UseCaseError;

/// Use case for reading the caller's account details
pub struct GetUserInfoUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserInfoUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::UserNotFound` if the account does not exist.
    pub async fn execute(&self, uid: UserId) -> Result<UserProfile, UseCaseError> {
        tracing::debug!(uid = %uid, "Getting user info");

        self.user_repository
            .find_profile(uid)
            .await?
            .ok_or_else(|| UseCaseError::UserNotFound(uid.to_string()))
    }
}
