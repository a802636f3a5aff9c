//! Create Product Use Case

use std::sync::Arc;

use crate::application::use_cases::on_duplicate;
use crate::domain::gateways::ProductRepository;
use crate::domain::models::product::{Product, ProductData};
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Use case for creating a product
pub struct CreateProductUseCase {
    product_repository: Arc<dyn ProductRepository>,
}

impl CreateProductUseCase {
    /// Create a new CreateProductUseCase
    #[must_use]
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` for a negative price or unknown status.
    /// Returns `UseCaseError::ProductExists` if the caller already has a product with that name.
    pub async fn execute(&self, creator: UserId, data: ProductData) -> Result<Product, UseCaseError> {
        tracing::info!(uid = %creator, name = %data.name, "Creating product");

        data.validate()?;

        if self
            .product_repository
            .exists_by_name(creator, &data.name, None)
            .await?
        {
            tracing::warn!(uid = %creator, name = %data.name, "Product name already used");
            return Err(UseCaseError::ProductExists(data.name));
        }

        let product = self
            .product_repository
            .create(creator, &data)
            .await
            .map_err(|e| on_duplicate(e, || UseCaseError::ProductExists(data.name.clone())))?;

        tracing::info!(product_id = product.id, "Product created successfully");
        Ok(product)
    }
}
