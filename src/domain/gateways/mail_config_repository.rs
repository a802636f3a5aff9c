//! Mail Configuration Repository Gateway

use async_trait::async_trait;

use crate::domain::models::mail_config::{MailConfig, MailConfigData};
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailConfigRepository: Send + Sync {
    async fn find_by_creator(&self, creator: UserId) -> Result<Option<MailConfig>, RepositoryError>;

    /// Insert or replace the creator's configuration
    async fn upsert(&self, creator: UserId, data: &MailConfigData) -> Result<MailConfig, RepositoryError>;

    async fn delete(&self, creator: UserId) -> Result<bool, RepositoryError>;
}
