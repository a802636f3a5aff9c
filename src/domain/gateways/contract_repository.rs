//! Contract Repository Gateway

use async_trait::async_trait;

use crate::domain::models::contract::{Contract, ContractData, ContractListItem, ContractQuery};
use crate::domain::models::page::Paged;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

/// Repository trait for Contract persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContractRepository: Send + Sync {
    async fn create(&self, creator: UserId, data: &ContractData) -> Result<Contract, RepositoryError>;

    /// Update every editable field; id, creator and creation time are kept
    async fn update(
        &self,
        creator: UserId,
        id: i64,
        data: &ContractData,
    ) -> Result<Option<Contract>, RepositoryError>;

    async fn delete(&self, creator: UserId, ids: &[i64]) -> Result<u64, RepositoryError>;

    async fn find_by_id(&self, creator: UserId, id: i64) -> Result<Option<Contract>, RepositoryError>;

    /// One page of contracts joined with their customer, plus the total count
    async fn list(&self, query: &ContractQuery) -> Result<Paged<ContractListItem>, RepositoryError>;

    /// Number of the creator's contracts referencing any of the customers
    async fn count_by_customers(&self, creator: UserId, cids: &[i64]) -> Result<i64, RepositoryError>;
}
