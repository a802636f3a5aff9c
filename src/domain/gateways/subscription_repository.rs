//! Subscription Repository Gateway

use async_trait::async_trait;

use crate::domain::models::subscription::Subscription;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Check whether the user already has a subscription row
    async fn exists(&self, uid: UserId) -> Result<bool, RepositoryError>;

    async fn find_by_uid(&self, uid: UserId) -> Result<Option<Subscription>, RepositoryError>;

    async fn create(&self, subscription: &Subscription) -> Result<(), RepositoryError>;

    /// Overwrite version and expiry of an existing row
    async fn update(&self, subscription: &Subscription) -> Result<bool, RepositoryError>;
}
