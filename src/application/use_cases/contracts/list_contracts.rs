//! List Contracts Use Case
//!
//! Paginated contract list joined with customer names.

use std::sync::Arc;

use crate::domain::gateways::ContractRepository;
use crate::domain::models::contract::{ContractListItem, ContractQuery};
use crate::domain::models::page::Paged;
use crate::shared::errors::UseCaseError;

pub struct ListContractsUseCase {
    contract_repository: Arc<dyn ContractRepository>,
}

impl ListContractsUseCase {
    #[must_use]
    pub fn new(contract_repository: Arc<dyn ContractRepository>) -> Self {
        Self { contract_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if either the page or the count query fails.
    pub async fn execute(&self, query: ContractQuery) -> Result<Paged<ContractListItem>, UseCaseError> {
        tracing::debug!(
            uid = %query.creator,
            filter = ?query.filter,
            page = query.page.num(),
            "Listing contracts"
        );

        let page = self.contract_repository.list(&query).await?;

        tracing::debug!(total = page.total, returned = page.items.len(), "Contracts listed");
        Ok(page)
    }
}
