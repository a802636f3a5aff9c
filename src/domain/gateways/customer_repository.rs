//! Customer Repository Gateway

use async_trait::async_trait;

use crate::domain::models::customer::{Customer, CustomerData, CustomerOption, CustomerQuery};
use crate::domain::models::page::Paged;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

/// Repository trait for Customer persistence operations.
/// Every method is scoped to the owning user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, creator: UserId, data: &CustomerData) -> Result<Customer, RepositoryError>;

    async fn update(
        &self,
        creator: UserId,
        id: i64,
        data: &CustomerData,
    ) -> Result<Option<Customer>, RepositoryError>;

    async fn delete(&self, creator: UserId, ids: &[i64]) -> Result<u64, RepositoryError>;

    async fn find_by_id(&self, creator: UserId, id: i64) -> Result<Option<Customer>, RepositoryError>;

    /// Check if the name is taken, optionally excluding a specific customer id
    async fn exists_by_name(
        &self,
        creator: UserId,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError>;

    async fn list(&self, query: &CustomerQuery) -> Result<Paged<Customer>, RepositoryError>;

    /// All customers of the creator as id/name pairs, sorted by name
    async fn options(&self, creator: UserId) -> Result<Vec<CustomerOption>, RepositoryError>;
}
