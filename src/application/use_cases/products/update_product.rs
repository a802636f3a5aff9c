//! Update Product Use Case (PUT)

use std::sync::Arc;

use crate::application::use_cases::on_duplicate;
use crate::domain::gateways::ProductRepository;
use crate::domain::models::product::{Product, ProductData};
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

pub struct UpdateProductUseCase {
    product_repository: Arc<dyn ProductRepository>,
}

impl UpdateProductUseCase {
    #[must_use]
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::ProductNotFound` if the product doesn't exist for the caller.
    /// Returns `UseCaseError::ProductExists` if another product already uses the new name.
    pub async fn execute(&self, creator: UserId, id: i64, data: ProductData) -> Result<Product, UseCaseError> {
        tracing::info!(uid = %creator, product_id = id, "Updating product");

        data.validate()?;

        let existing = self
            .product_repository
            .find_by_id(creator, id)
            .await?
            .ok_or(UseCaseError::ProductNotFound(id))?;

        if existing.data.name != data.name
            && self
                .product_repository
                .exists_by_name(creator, &data.name, Some(id))
                .await?
        {
            tracing::warn!(product_id = id, name = %data.name, "Cannot update: name already used");
            return Err(UseCaseError::ProductExists(data.name));
        }

        let product = self
            .product_repository
            .update(creator, id, &data)
            .await
            .map_err(|e| on_duplicate(e, || UseCaseError::ProductExists(data.name.clone())))?
            .ok_or(UseCaseError::ProductNotFound(id))?;

        tracing::info!(product_id = id, "Product updated successfully");
        Ok(product)
    }
}
