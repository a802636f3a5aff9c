//! Get Subscription Use Case

use std::sync::Arc;

use crate::domain::gateways::SubscriptionRepository;
use crate::domain::models::subscription::Subscription;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

pub struct GetSubscriptionUseCase {
    subscription_repository: Arc<dyn SubscriptionRepository>,
}

impl GetSubscriptionUseCase {
    #[must_use]
    pub fn new(subscription_repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self {
            subscription_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::UserNotFound` when the caller has no subscription row,
    /// which only happens for accounts removed concurrently.
    pub async fn execute(&self, uid: UserId) -> Result<Subscription, UseCaseError> {
        tracing::debug!(uid = %uid, "Getting subscription");

        self.subscription_repository
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| UseCaseError::UserNotFound(uid.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::subscription_repository::MockSubscriptionRepository;
    use crate::domain::models::subscription::FREE_VERSION;

    #[tokio::test]
    async fn should_return_subscription() {
        let mut subscriptions = MockSubscriptionRepository::new();
        subscriptions
            .expect_find_by_uid()
            .returning(|uid| Ok(Some(Subscription::free(uid))));

        let use_case = GetSubscriptionUseCase::new(Arc::new(subscriptions));
        let subscription = use_case.execute(UserId::new(8)).await.unwrap();

        assert_eq!(subscription.uid, UserId::new(8));
        assert_eq!(subscription.version, FREE_VERSION);
        assert!(subscription.expired_at.is_none());
    }

    #[tokio::test]
    async fn should_return_user_not_found_without_row() {
        let mut subscriptions = MockSubscriptionRepository::new();
        subscriptions.expect_find_by_uid().returning(|_| Ok(None));

        let use_case = GetSubscriptionUseCase::new(Arc::new(subscriptions));
        let result = use_case.execute(UserId::new(8)).await;

        assert!(matches!(result, Err(UseCaseError::UserNotFound(_))));
    }
}
