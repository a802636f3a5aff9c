//! Create Customer Use Case

use std::sync::Arc;

use crate::application::use_cases::on_duplicate;
use crate::domain::gateways::CustomerRepository;
use crate::domain::models::customer::{Customer, CustomerData};
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Use case for creating a customer
pub struct CreateCustomerUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl CreateCustomerUseCase {
    /// Create a new CreateCustomerUseCase
    #[must_use]
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::CustomerExists` if the caller already has a customer with that name.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, creator: UserId, data: CustomerData) -> Result<Customer, UseCaseError> {
        tracing::info!(uid = %creator, name = %data.name, "Creating customer");

        if self
            .customer_repository
            .exists_by_name(creator, &data.name, None)
            .await?
        {
            tracing::warn!(uid = %creator, name = %data.name, "Customer name already used");
            return Err(UseCaseError::CustomerExists(data.name));
        }

        let customer = self
            .customer_repository
            .create(creator, &data)
            .await
            .map_err(|e| on_duplicate(e, || UseCaseError::CustomerExists(data.name.clone())))?;

        tracing::info!(customer_id = customer.id, "Customer created successfully");
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{test_customer, test_customer_data, uid};
    use crate::domain::gateways::customer_repository::MockCustomerRepository;
    use crate::shared::errors::RepositoryError;

    #[tokio::test]
    async fn should_create_customer() {
        let mut customers = MockCustomerRepository::new();
        customers
            .expect_exists_by_name()
            .withf(|_, name, exclude| name == "Acme" && exclude.is_none())
            .returning(|_, _, _| Ok(false));
        customers
            .expect_create()
            .times(1)
            .returning(|_, data| Ok(test_customer(9, &data.name)));

        let use_case = CreateCustomerUseCase::new(Arc::new(customers));
        let customer = use_case.execute(uid(), test_customer_data("Acme")).await.unwrap();

        assert_eq!(customer.id, 9);
        assert_eq!(customer.data.name, "Acme");
    }

    #[tokio::test]
    async fn should_return_exists_for_duplicate_name() {
        let mut customers = MockCustomerRepository::new();
        customers.expect_exists_by_name().returning(|_, _, _| Ok(true));
        customers.expect_create().never();

        let use_case = CreateCustomerUseCase::new(Arc::new(customers));
        let result = use_case.execute(uid(), test_customer_data("Acme")).await;

        assert!(matches!(result, Err(UseCaseError::CustomerExists(name)) if name == "Acme"));
    }

    #[tokio::test]
    async fn should_return_exists_when_insert_hits_unique_constraint() {
        let mut customers = MockCustomerRepository::new();
        customers.expect_exists_by_name().returning(|_, _, _| Ok(false));
        customers
            .expect_create()
            .returning(|_, _| Err(RepositoryError::Duplicate("uq_customers_creator_name".into())));

        let use_case = CreateCustomerUseCase::new(Arc::new(customers));
        let result = use_case.execute(uid(), test_customer_data("Acme")).await;

        assert!(matches!(result, Err(UseCaseError::CustomerExists(name)) if name == "Acme"));
    }
}
