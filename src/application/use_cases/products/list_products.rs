//! Product Query Use Cases

use std::sync::Arc;

use crate::domain::gateways::ProductRepository;
use crate::domain::models::page::Paged;
use crate::domain::models::product::{Product, ProductQuery};
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

pub struct ListProductsUseCase {
    product_repository: Arc<dyn ProductRepository>,
}

impl ListProductsUseCase {
    #[must_use]
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, query: ProductQuery) -> Result<Paged<Product>, UseCaseError> {
        tracing::debug!(
            uid = %query.creator,
            name = ?query.name,
            status = ?query.status,
            "Listing products"
        );
        Ok(self.product_repository.list(&query).await?)
    }
}

pub struct GetProductUseCase {
    product_repository: Arc<dyn ProductRepository>,
}

impl GetProductUseCase {
    #[must_use]
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::ProductNotFound` if the product doesn't exist for the caller.
    pub async fn execute(&self, creator: UserId, id: i64) -> Result<Product, UseCaseError> {
        self.product_repository
            .find_by_id(creator, id)
            .await?
            .ok_or(UseCaseError::ProductNotFound(id))
    }
}
