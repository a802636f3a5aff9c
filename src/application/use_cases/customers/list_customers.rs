//! Customer Query Use Cases
//!
//! Paginated list, single lookup and the id/name option list.

use std::sync::Arc;

use crate::domain::gateways::CustomerRepository;
use crate::domain::models::customer::{Customer, CustomerOption, CustomerQuery};
use crate::domain::models::page::Paged;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

pub struct ListCustomersUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl ListCustomersUseCase {
    #[must_use]
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, query: CustomerQuery) -> Result<Paged<Customer>, UseCaseError> {
        tracing::debug!(uid = %query.creator, name = ?query.name, "Listing customers");
        Ok(self.customer_repository.list(&query).await?)
    }
}

pub struct GetCustomerUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl GetCustomerUseCase {
    #[must_use]
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::CustomerNotFound` if the customer doesn't exist for the caller.
    pub async fn execute(&self, creator: UserId, id: i64) -> Result<Customer, UseCaseError> {
        tracing::debug!(uid = %creator, customer_id = id, "Getting customer");

        self.customer_repository
            .find_by_id(creator, id)
            .await?
            .ok_or(UseCaseError::CustomerNotFound(id))
    }
}

/// Id/name pairs of every customer, for selection lists
pub struct CustomerOptionsUseCase {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl CustomerOptionsUseCase {
    #[must_use]
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, creator: UserId) -> Result<Vec<CustomerOption>, UseCaseError> {
        Ok(self.customer_repository.options(creator).await?)
    }
}
