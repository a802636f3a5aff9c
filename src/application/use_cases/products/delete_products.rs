//! Delete Products Use Case

use std::sync::Arc;

use crate::application::use_cases::dedup_ids;
use crate::domain::gateways::ProductRepository;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

pub struct DeleteProductsUseCase {
    product_repository: Arc<dyn ProductRepository>,
}

impl DeleteProductsUseCase {
    #[must_use]
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// Contracts keep their own copy of product lines, so products can always be removed.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for an empty id list.
    pub async fn execute(&self, creator: UserId, ids: Vec<i64>) -> Result<u64, UseCaseError> {
        let ids = dedup_ids(ids)?;
        tracing::info!(uid = %creator, count = ids.len(), "Deleting products");

        let deleted = self.product_repository.delete(creator, &ids).await?;

        tracing::info!(uid = %creator, deleted, "Products deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::uid;
    use crate::domain::gateways::product_repository::MockProductRepository;

    #[tokio::test]
    async fn should_delete_products() {
        let mut products = MockProductRepository::new();
        products
            .expect_delete()
            .withf(|creator, ids| *creator == uid() && ids == [7])
            .returning(|_, _| Ok(1));

        let use_case = DeleteProductsUseCase::new(Arc::new(products));
        assert_eq!(use_case.execute(uid(), vec![7, 7]).await.unwrap(), 1);
    }
}
