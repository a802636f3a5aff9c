//! Delete Contracts Use Case

use std::sync::Arc;

use crate::application::use_cases::dedup_ids;
use crate::domain::gateways::ContractRepository;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a batch of the caller's contracts
pub struct DeleteContractsUseCase {
    contract_repository: Arc<dyn ContractRepository>,
}

impl DeleteContractsUseCase {
    #[must_use]
    pub fn new(contract_repository: Arc<dyn ContractRepository>) -> Self {
        Self { contract_repository }
    }

    /// Execute the use case, returning the number of removed contracts.
    /// Ids owned by other users are ignored.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for an empty id list.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, creator: UserId, ids: Vec<i64>) -> Result<u64, UseCaseError> {
        let ids = dedup_ids(ids)?;
        tracing::info!(uid = %creator, count = ids.len(), "Deleting contracts");

        let deleted = self.contract_repository.delete(creator, &ids).await?;

        tracing::info!(uid = %creator, deleted, "Contracts deleted");
        Ok(deleted)
    }
}
