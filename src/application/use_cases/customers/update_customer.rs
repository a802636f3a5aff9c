//! Update Customer Use Case (PUT)

use std::sync::Arc;

use crate::application::use_cases::on_duplicate;
use crate::domain::gateways::CustomerRepository;
use crate::domain::models::customer::{Customer, CustomerData};
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Use case for full customer update (PUT)
pub struct UpdateCustomerUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl UpdateCustomerUseCase {
    #[must_use]
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::CustomerNotFound` if the customer doesn't exist for the caller.
    /// Returns `UseCaseError::CustomerExists` if another customer already uses the new name.
    pub async fn execute(
        &self,
        creator: UserId,
        id: i64,
        data: CustomerData,
    ) -> Result<Customer, UseCaseError> {
        tracing::info!(uid = %creator, customer_id = id, "Updating customer");

        let existing = self
            .customer_repository
            .find_by_id(creator, id)
            .await?
            .ok_or(UseCaseError::CustomerNotFound(id))?;

        // Check name uniqueness if it changed
        if existing.data.name != data.name
            && self
                .customer_repository
                .exists_by_name(creator, &data.name, Some(id))
                .await?
        {
            tracing::warn!(customer_id = id, name = %data.name, "Cannot update: name already used");
            return Err(UseCaseError::CustomerExists(data.name));
        }

        let customer = self
            .customer_repository
            .update(creator, id, &data)
            .await
            .map_err(|e| on_duplicate(e, || UseCaseError::CustomerExists(data.name.clone())))?
            .ok_or(UseCaseError::CustomerNotFound(id))?;

        tracing::info!(customer_id = id, "Customer updated successfully");
        Ok(customer)
    }
}
