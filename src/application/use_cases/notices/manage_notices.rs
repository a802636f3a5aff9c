//! Notice Use Cases
//!
//! Listing, deleting and acknowledging the caller's notices.

use std::sync::Arc;

use crate::application::use_cases::dedup_ids;
use crate::domain::gateways::NoticeRepository;
use crate::domain::models::notice::{Notice, NoticeQuery};
use crate::domain::models::page::Paged;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

pub struct ListNoticesUseCase {
    notice_repository: Arc<dyn NoticeRepository>,
}

impl ListNoticesUseCase {
    #[must_use]
    pub fn new(notice_repository: Arc<dyn NoticeRepository>) -> Self {
        Self { notice_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, query: NoticeQuery) -> Result<Paged<Notice>, UseCaseError> {
        tracing::debug!(uid = %query.creator, page = query.page.num(), "Listing notices");
        Ok(self.notice_repository.list(&query).await?)
    }
}

pub struct DeleteNoticesUseCase {
    notice_repository: Arc<dyn NoticeRepository>,
}

impl DeleteNoticesUseCase {
    #[must_use]
    pub fn new(notice_repository: Arc<dyn NoticeRepository>) -> Self {
        Self { notice_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for an empty id list.
    pub async fn execute(&self, creator: UserId, ids: Vec<i64>) -> Result<u64, UseCaseError> {
        let ids = dedup_ids(ids)?;
        let deleted = self.notice_repository.delete(creator, &ids).await?;
        tracing::info!(uid = %creator, deleted, "Notices deleted");
        Ok(deleted)
    }
}

pub struct MarkNoticesReadUseCase {
    notice_repository: Arc<dyn NoticeRepository>,
}

impl MarkNoticesReadUseCase {
    #[must_use]
    pub fn new(notice_repository: Arc<dyn NoticeRepository>) -> Self {
        Self { notice_repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for an empty id list.
    pub async fn execute(&self, creator: UserId, ids: Vec<i64>) -> Result<u64, UseCaseError> {
        let ids = dedup_ids(ids)?;
        let changed = self.notice_repository.mark_read(creator, &ids).await?;
        tracing::info!(uid = %creator, changed, "Notices marked as read");
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{test_notice, uid};
    use crate::domain::gateways::notice_repository::MockNoticeRepository;
    use crate::domain::models::page::Page;

    #[tokio::test]
    async fn should_list_notices() {
        let mut notices = MockNoticeRepository::new();
        notices.expect_list().returning(|q| {
            Ok(Paged {
                total: 1,
                items: vec![test_notice(q.creator, "hello")],
            })
        });

        let use_case = ListNoticesUseCase::new(Arc::new(notices));
        let page = use_case
            .execute(NoticeQuery {
                creator: uid(),
                page: Page::default(),
            })
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].content, "hello");
    }

    #[tokio::test]
    async fn should_delete_notices() {
        let mut notices = MockNoticeRepository::new();
        notices
            .expect_delete()
            .withf(|_, ids| ids == [1, 2])
            .returning(|_, _| Ok(2));

        let use_case = DeleteNoticesUseCase::new(Arc::new(notices));
        assert_eq!(use_case.execute(uid(), vec![2, 1]).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn should_mark_notices_read() {
        let mut notices = MockNoticeRepository::new();
        notices.expect_mark_read().times(1).returning(|_, _| Ok(1));

        let use_case = MarkNoticesReadUseCase::new(Arc::new(notices));
        assert_eq!(use_case.execute(uid(), vec![5]).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_reject_empty_ids() {
        let use_case = MarkNoticesReadUseCase::new(Arc::new(MockNoticeRepository::new()));
        let result = use_case.execute(uid(), Vec::new()).await;
        assert!(matches!(result, Err(UseCaseError::Validation(_))));
    }
}
