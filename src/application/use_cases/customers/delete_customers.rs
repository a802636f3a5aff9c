//! Delete Customers Use Case
//!
//! Customers referenced by any contract cannot be deleted.

use std::sync::Arc;

use crate::application::use_cases::{dedup_ids, on_referenced};
use crate::domain::gateways::{ContractRepository, CustomerRepository};
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

pub struct DeleteCustomersUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
    contract_repository: Arc<dyn ContractRepository>,
}

impl DeleteCustomersUseCase {
    #[must_use]
    pub fn new(
        customer_repository: Arc<dyn CustomerRepository>,
        contract_repository: Arc<dyn ContractRepository>,
    ) -> Self {
        Self {
            customer_repository,
            contract_repository,
        }
    }

    /// Execute the use case, returning the number of removed customers
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for an empty id list.
    /// Returns `UseCaseError::CustomerInUse` if a contract references one of the customers.
    pub async fn execute(&self, creator: UserId, ids: Vec<i64>) -> Result<u64, UseCaseError> {
        let ids = dedup_ids(ids)?;
        tracing::info!(uid = %creator, count = ids.len(), "Deleting customers");

        let referencing = self.contract_repository.count_by_customers(creator, &ids).await?;
        if referencing > 0 {
            tracing::warn!(uid = %creator, contracts = referencing, "Customers still referenced");
            return Err(UseCaseError::CustomerInUse(referencing));
        }

        let deleted = match self.customer_repository.delete(creator, &ids).await {
            Ok(deleted) => deleted,
            Err(err) => {
                // a contract was added after the count above
                let referencing = self.contract_repository.count_by_customers(creator, &ids).await?;
                return Err(on_referenced(err, || UseCaseError::CustomerInUse(referencing.max(1))));
            }
        };

        tracing::info!(uid = %creator, deleted, "Customers deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::uid;
    use crate::domain::gateways::contract_repository::MockContractRepository;
    use crate::domain::gateways::customer_repository::MockCustomerRepository;
    use crate::shared::errors::RepositoryError;

    #[tokio::test]
    async fn should_delete_unreferenced_customers() {
        let mut contracts = MockContractRepository::new();
        contracts.expect_count_by_customers().returning(|_, _| Ok(0));
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_delete()
            .withf(|_, ids| ids == [4, 5])
            .times(1)
            .returning(|_, _| Ok(2));

        let use_case = DeleteCustomersUseCase::new(Arc::new(customers), Arc::new(contracts));
        assert_eq!(use_case.execute(uid(), vec![5, 4]).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn should_block_delete_when_contracts_reference_customer() {
        let mut contracts = MockContractRepository::new();
        contracts.expect_count_by_customers().returning(|_, _| Ok(3));
        let mut customers = MockCustomerRepository::new();
        customers.expect_delete().never();

        let use_case = DeleteCustomersUseCase::new(Arc::new(customers), Arc::new(contracts));
        let result = use_case.execute(uid(), vec![4]).await;

        assert!(matches!(result, Err(UseCaseError::CustomerInUse(3))));
    }

    #[tokio::test]
    async fn should_report_in_use_when_delete_hits_foreign_key() {
        let mut contracts = MockContractRepository::new();
        let mut counts = vec![1, 0];
        contracts
            .expect_count_by_customers()
            .times(2)
            .returning(move |_, _| Ok(counts.pop().unwrap_or_default()));
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_delete()
            .returning(|_, _| Err(RepositoryError::Referenced("contracts_cid_fkey".into())));

        let use_case = DeleteCustomersUseCase::new(Arc::new(customers), Arc::new(contracts));
        let result = use_case.execute(uid(), vec![4]).await;

        assert!(matches!(result, Err(UseCaseError::CustomerInUse(1))));
    }
}
