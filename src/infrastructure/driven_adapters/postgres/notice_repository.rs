//! PostgreSQL Notice Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::NoticeRepository;
use crate::domain::models::notice::{Notice, NoticeQuery, NoticeStatus};
use crate::domain::models::page::Paged;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct NoticeRow {
    id: i64,
    content: String,
    status: i16,
    creator: i64,
    created_at: DateTime<Utc>,
}

impl From<NoticeRow> for Notice {
    fn from(row: NoticeRow) -> Self {
        Notice {
            id: row.id,
            content: row.content,
            status: NoticeStatus::from_value(row.status),
            creator: UserId::new(row.creator),
            created_at: row.created_at,
        }
    }
}

pub struct PostgresNoticeRepository {
    pool: PgPool,
}

impl PostgresNoticeRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoticeRepository for PostgresNoticeRepository {
    async fn create(&self, creator: UserId, content: &str) -> Result<Notice, RepositoryError> {
        let row = sqlx::query_as::<_, NoticeRow>(
            r#"
            INSERT INTO notices (content, status, creator)
            VALUES ($1, $2, $3)
            RETURNING id, content, status, creator, created_at
            "#,
        )
        .bind(content)
        .bind(NoticeStatus::Unread.value())
        .bind(creator.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(Notice::from(row))
    }

    async fn list(&self, query: &NoticeQuery) -> Result<Paged<Notice>, RepositoryError> {
        let rows = sqlx::query_as::<_, NoticeRow>(
            r#"
            SELECT id, content, status, creator, created_at
            FROM notices
            WHERE creator = $1
            ORDER BY id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(query.creator.value())
        .bind(query.page.limit())
        .bind(query.page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notices WHERE creator = $1")
            .bind(query.creator.value())
            .fetch_one(&self.pool)
            .await?;

        Ok(Paged {
            total,
            items: rows.into_iter().map(Notice::from).collect(),
        })
    }

    async fn delete(&self, creator: UserId, ids: &[i64]) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM notices WHERE creator = $1 AND id = ANY($2)")
            .bind(creator.value())
            .bind(ids)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn mark_read(&self, creator: UserId, ids: &[i64]) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE notices
            SET status = $3
            WHERE creator = $1 AND id = ANY($2)
            "#,
        )
        .bind(creator.value())
        .bind(ids)
        .bind(NoticeStatus::Read.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
