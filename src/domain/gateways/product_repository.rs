//! Product Repository Gateway

use async_trait::async_trait;

use crate::domain::models::page::Paged;
use crate::domain::models::product::{Product, ProductData, ProductQuery};
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, creator: UserId, data: &ProductData) -> Result<Product, RepositoryError>;

    async fn update(
        &self,
        creator: UserId,
        id: i64,
        data: &ProductData,
    ) -> Result<Option<Product>, RepositoryError>;

    async fn delete(&self, creator: UserId, ids: &[i64]) -> Result<u64, RepositoryError>;

    async fn find_by_id(&self, creator: UserId, id: i64) -> Result<Option<Product>, RepositoryError>;

    async fn exists_by_name(
        &self,
        creator: UserId,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError>;

    async fn list(&self, query: &ProductQuery) -> Result<Paged<Product>, RepositoryError>;
}
