//! PostgreSQL Subscription Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::SubscriptionRepository;
use crate::domain::models::subscription::Subscription;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    uid: i64,
    version: i16,
    expired_at: Option<DateTime<Utc>>,
}

impl From<SubscriptionRow> for Subscription {
    fn from(row: SubscriptionRow) -> Self {
        Subscription {
            uid: UserId::new(row.uid),
            version: row.version,
            expired_at: row.expired_at,
        }
    }
}

pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn exists(&self, uid: UserId) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM subscriptions WHERE uid = $1)",
        )
        .bind(uid.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_uid(&self, uid: UserId) -> Result<Option<Subscription>, RepositoryError> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            r#"
            SELECT uid, version, expired_at
            FROM subscriptions
            WHERE uid = $1
            "#,
        )
        .bind(uid.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Subscription::from))
    }

    async fn create(&self, subscription: &Subscription) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions (uid, version, expired_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(subscription.uid.value())
        .bind(subscription.version)
        .bind(subscription.expired_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE subscriptions
            SET version = $2, expired_at = $3, updated_at = NOW()
            WHERE uid = $1
            "#,
        )
        .bind(subscription.uid.value())
        .bind(subscription.version)
        .bind(subscription.expired_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
