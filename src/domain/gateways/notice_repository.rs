//! Notice Repository Gateway

use async_trait::async_trait;

use crate::domain::models::notice::{Notice, NoticeQuery};
use crate::domain::models::page::Paged;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoticeRepository: Send + Sync {
    async fn create(&self, creator: UserId, content: &str) -> Result<Notice, RepositoryError>;

    /// One page of the creator's notices, newest first
    async fn list(&self, query: &NoticeQuery) -> Result<Paged<Notice>, RepositoryError>;

    /// Delete notices owned by the creator; returns the number removed
    async fn delete(&self, creator: UserId, ids: &[i64]) -> Result<u64, RepositoryError>;

    /// Mark notices owned by the creator as read; returns the number changed
    async fn mark_read(&self, creator: UserId, ids: &[i64]) -> Result<u64, RepositoryError>;
}
