//! Get Contract Use Cases
//!
//! Single contract lookup and its attached product lines.

use std::sync::Arc;

use crate::domain::gateways::ContractRepository;
use crate::domain::models::contract::{Contract, ContractProduct};
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Use case for getting one of the caller's contracts
pub struct GetContractUseCase {
    contract_repository: Arc<dyn ContractRepository>,
}

impl GetContractUseCase {
    #[must_use]
    pub fn new(contract_repository: Arc<dyn ContractRepository>) -> Self {
        Self { contract_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::ContractNotFound` if the contract doesn't exist for the caller.
    pub async fn execute(&self, creator: UserId, id: i64) -> Result<Contract, UseCaseError> {
        tracing::debug!(uid = %creator, contract_id = id, "Getting contract");

        self.contract_repository
            .find_by_id(creator, id)
            .await?
            .ok_or(UseCaseError::ContractNotFound(id))
    }
}

/// Use case for listing the product lines of a contract
pub struct GetContractProductsUseCase {
    contract_repository: Arc<dyn ContractRepository>,
}

impl GetContractProductsUseCase {
    #[must_use]
    pub fn new(contract_repository: Arc<dyn ContractRepository>) -> Self {
        Self { contract_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::ContractNotFound` if the contract doesn't exist for the caller.
    pub async fn execute(&self, creator: UserId, id: i64) -> Result<Vec<ContractProduct>, UseCaseError> {
        tracing::debug!(uid = %creator, contract_id = id, "Getting contract products");

        let contract = self
            .contract_repository
            .find_by_id(creator, id)
            .await?
            .ok_or(UseCaseError::ContractNotFound(id))?;

        Ok(contract.product_list().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{test_contract, uid};
    use crate::domain::gateways::contract_repository::MockContractRepository;

    fn repository() -> MockContractRepository {
        let mut contracts = MockContractRepository::new();
        contracts
            .expect_find_by_id()
            .returning(|_, id| Ok((id == 1).then(|| test_contract(1, 4))));
        contracts
    }

    #[tokio::test]
    async fn should_return_contract() {
        let use_case = GetContractUseCase::new(Arc::new(repository()));
        let contract = use_case.execute(uid(), 1).await.unwrap();
        assert_eq!(contract.cid(), 4);
    }

    #[tokio::test]
    async fn should_return_not_found() {
        let use_case = GetContractUseCase::new(Arc::new(repository()));
        let result = use_case.execute(uid(), 2).await;
        assert!(matches!(result, Err(UseCaseError::ContractNotFound(2))));
    }

    #[tokio::test]
    async fn should_return_product_lines() {
        let use_case = GetContractProductsUseCase::new(Arc::new(repository()));
        let products = use_case.execute(uid(), 1).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].count, 12);
    }

    #[tokio::test]
    async fn should_return_not_found_for_products() {
        let use_case = GetContractProductsUseCase::new(Arc::new(repository()));
        let result = use_case.execute(uid(), 3).await;
        assert!(matches!(result, Err(UseCaseError::ContractNotFound(3))));
    }
}
