//! Mail Configuration Use Cases
//!
//! Each user owns at most one configuration.

use std::sync::Arc;

use crate::domain::gateways::MailConfigRepository;
use crate::domain::models::mail_config::{MailConfig, MailConfigData};
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

pub struct GetMailConfigUseCase {
    mail_config_repository: Arc<dyn MailConfigRepository>,
}

impl GetMailConfigUseCase {
    #[must_use]
    pub fn new(mail_config_repository: Arc<dyn MailConfigRepository>) -> Self {
        Self { mail_config_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::MailConfigNotFound` if the caller has not saved one.
    pub async fn execute(&self, creator: UserId) -> Result<MailConfig, UseCaseError> {
        self.mail_config_repository
            .find_by_creator(creator)
            .await?
            .ok_or(UseCaseError::MailConfigNotFound)
    }
}

pub struct SaveMailConfigUseCase {
    mail_config_repository: Arc<dyn MailConfigRepository>,
}

impl SaveMailConfigUseCase {
    #[must_use]
    pub fn new(mail_config_repository: Arc<dyn MailConfigRepository>) -> Self {
        Self { mail_config_repository }
    }

    /// Insert or replace the caller's configuration
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for a port outside 1..=65535.
    pub async fn execute(&self, creator: UserId, data: MailConfigData) -> Result<MailConfig, UseCaseError> {
        tracing::info!(uid = %creator, host = %data.stmp, "Saving mail configuration");

        if !(1..=65535).contains(&data.port) {
            return Err(UseCaseError::Validation(vec![format!(
                "port: {} is not a valid port",
                data.port
            )]));
        }

        Ok(self.mail_config_repository.upsert(creator, &data).await?)
    }
}

pub struct DeleteMailConfigUseCase {
    mail_config_repository: Arc<dyn MailConfigRepository>,
}

impl DeleteMailConfigUseCase {
    #[must_use]
    pub fn new(mail_config_repository: Arc<dyn MailConfigRepository>) -> Self {
        Self { mail_config_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::MailConfigNotFound` if there was nothing to delete.
    pub async fn execute(&self, creator: UserId) -> Result<(), UseCaseError> {
        if !self.mail_config_repository.delete(creator).await? {
            return Err(UseCaseError::MailConfigNotFound);
        }
        tracing::info!(uid = %creator, "Mail configuration deleted");
        Ok(())
    }
}
