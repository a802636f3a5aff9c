//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod contracts;
pub mod customers;
pub mod files;
pub mod mail_configs;
pub mod notices;
pub mod products;
pub mod subscriptions;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;
use std::time::Duration;

use crate::domain::gateways::{
    ContractRepository, CustomerRepository, FileStorage, MailConfigRepository, Mailer,
    NoticeRepository, PasswordHasher, ProductRepository, SubscriptionRepository, TokenService,
    UserRepository, VerifyCodeStore,
};
use crate::shared::errors::{RepositoryError, UseCaseError};

pub use contracts::ContractUseCases;
pub use customers::CustomerUseCases;
pub use files::{RemoveFileUseCase, UploadFileUseCase};
pub use mail_configs::MailConfigUseCases;
pub use notices::NoticeUseCases;
pub use products::ProductUseCases;
pub use subscriptions::GetSubscriptionUseCase;
pub use users::UserUseCases;

/// Concrete gateway implementations the use cases are wired against
#[derive(Clone)]
pub struct Gateways {
    pub users: Arc<dyn UserRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub notices: Arc<dyn NoticeRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub contracts: Arc<dyn ContractRepository>,
    pub mail_configs: Arc<dyn MailConfigRepository>,
    pub verify_codes: Arc<dyn VerifyCodeStore>,
    pub mailer: Arc<dyn Mailer>,
    pub files: Arc<dyn FileStorage>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
}

/// Every use case of the service
pub struct UseCases {
    pub users: UserUseCases,
    pub contracts: ContractUseCases,
    pub customers: CustomerUseCases,
    pub products: ProductUseCases,
    pub subscription: GetSubscriptionUseCase,
    pub notices: NoticeUseCases,
    pub mail_configs: MailConfigUseCases,
    pub upload_file: UploadFileUseCase,
    pub remove_file: RemoveFileUseCase,
}

impl UseCases {
    #[must_use]
    pub fn new(gateways: &Gateways, code_ttl: Duration) -> Self {
        Self {
            users: UserUseCases::new(gateways, code_ttl),
            contracts: ContractUseCases::new(gateways),
            customers: CustomerUseCases::new(gateways),
            products: ProductUseCases::new(gateways),
            subscription: GetSubscriptionUseCase::new(gateways.subscriptions.clone()),
            notices: NoticeUseCases::new(gateways),
            mail_configs: MailConfigUseCases::new(gateways),
            upload_file: UploadFileUseCase::new(gateways.files.clone()),
            remove_file: RemoveFileUseCase::new(gateways.files.clone()),
        }
    }
}

/// Sorted, duplicate-free ids for batch operations
pub(crate) fn dedup_ids(mut ids: Vec<i64>) -> Result<Vec<i64>, UseCaseError> {
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Err(UseCaseError::Validation(vec!["ids: must not be empty".to_string()]));
    }
    if ids[0] <= 0 {
        return Err(UseCaseError::Validation(vec![format!(
            "ids: {} is not a valid id",
            ids[0]
        )]));
    }
    Ok(ids)
}

/// Turn a constraint rejection from the database into a business error.
///
/// The exists-checks run before the write, so these only fire when a
/// concurrent request wins the race.
pub(crate) fn on_duplicate(
    err: RepositoryError,
    business: impl FnOnce() -> UseCaseError,
) -> UseCaseError {
    match err {
        RepositoryError::Duplicate(_) => business(),
        other => UseCaseError::Repository(other),
    }
}

pub(crate) fn on_referenced(
    err: RepositoryError,
    business: impl FnOnce() -> UseCaseError,
) -> UseCaseError {
    match err {
        RepositoryError::Referenced(_) => business(),
        other => UseCaseError::Repository(other),
    }
}
