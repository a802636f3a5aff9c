//! Update Contract Use Case (PUT)
//!
//! Replaces every editable field of an existing contract.

use std::sync::Arc;

use crate::application::use_cases::on_referenced;
use crate::domain::gateways::{ContractRepository, CustomerRepository};
use crate::domain::models::contract::{Contract, ContractData};
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Use case for full contract update (PUT)
pub struct UpdateContractUseCase {
    contract_repository: Arc<dyn ContractRepository>,
    customer_repository: Arc<dyn CustomerRepository>,
}

impl UpdateContractUseCase {
    /// Create a new UpdateContractUseCase
    #[must_use]
    pub fn new(
        contract_repository: Arc<dyn ContractRepository>,
        customer_repository: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            contract_repository,
            customer_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the data breaks a contract rule.
    /// Returns `UseCaseError::CustomerNotFound` if the customer is not the caller's.
    /// Returns `UseCaseError::ContractNotFound` if the contract doesn't exist for the caller.
    pub async fn execute(
        &self,
        creator: UserId,
        id: i64,
        data: ContractData,
    ) -> Result<Contract, UseCaseError> {
        tracing::info!(uid = %creator, contract_id = id, "Updating contract");

        data.validate()?;

        if self
            .customer_repository
            .find_by_id(creator, data.cid)
            .await?
            .is_none()
        {
            tracing::warn!(contract_id = id, cid = data.cid, "Contract customer not found");
            return Err(UseCaseError::CustomerNotFound(data.cid));
        }

        let contract = self
            .contract_repository
            .update(creator, id, &data)
            .await
            .map_err(|e| on_referenced(e, || UseCaseError::CustomerNotFound(data.cid)))?
            .ok_or_else(|| {
                tracing::warn!(contract_id = id, "Contract not found for update");
                UseCaseError::ContractNotFound(id)
            })?;

        tracing::info!(contract_id = id, "Contract updated successfully");
        Ok(contract)
    }
}
