//! Create Contract Use Case

use std::sync::Arc;

use crate::application::use_cases::on_referenced;
use crate::domain::gateways::{ContractRepository, CustomerRepository};
use crate::domain::models::contract::{Contract, ContractData};
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Use case for creating a contract with one of the caller's customers
pub struct CreateContractUseCase {
    contract_repository: Arc<dyn ContractRepository>,
    customer_repository: Arc<dyn CustomerRepository>,
}

impl CreateContractUseCase {
    /// Create a new CreateContractUseCase
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
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, creator: UserId, data: ContractData) -> Result<Contract, UseCaseError> {
        tracing::info!(uid = %creator, name = %data.name, cid = data.cid, "Creating contract");

        data.validate()?;

        if self
            .customer_repository
            .find_by_id(creator, data.cid)
            .await?
            .is_none()
        {
            tracing::warn!(uid = %creator, cid = data.cid, "Contract customer not found");
            return Err(UseCaseError::CustomerNotFound(data.cid));
        }

        let contract = self
            .contract_repository
            .create(creator, &data)
            .await
            .map_err(|e| on_referenced(e, || UseCaseError::CustomerNotFound(data.cid)))?;

        tracing::info!(contract_id = contract.id(), "Contract created successfully");
        Ok(contract)
    }
}
