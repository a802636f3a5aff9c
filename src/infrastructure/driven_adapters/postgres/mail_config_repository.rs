//! PostgreSQL Mail Configuration Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::MailConfigRepository;
use crate::domain::models::mail_config::{MailConfig, MailConfigData};
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct MailConfigRow {
    id: i64,
    stmp: String,
    port: i32,
    auth_code: String,
    email: String,
    status: i16,
    creator: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MailConfigRow> for MailConfig {
    fn from(row: MailConfigRow) -> Self {
        MailConfig {
            id: row.id,
            data: MailConfigData {
                stmp: row.stmp,
                port: row.port,
                auth_code: row.auth_code,
                email: row.email,
                status: row.status,
            },
            creator: UserId::new(row.creator),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct PostgresMailConfigRepository {
    pool: PgPool,
}

impl PostgresMailConfigRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MailConfigRepository for PostgresMailConfigRepository {
    async fn find_by_creator(&self, creator: UserId) -> Result<Option<MailConfig>, RepositoryError> {
        let row = sqlx::query_as::<_, MailConfigRow>(
            r#"
            SELECT id, stmp, port, auth_code, email, status, creator, created_at, updated_at
            FROM mail_configs
            WHERE creator = $1
            "#,
        )
        .bind(creator.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MailConfig::from))
    }

    async fn upsert(&self, creator: UserId, data: &MailConfigData) -> Result<MailConfig, RepositoryError> {
        let row = sqlx::query_as::<_, MailConfigRow>(
            r#"
            INSERT INTO mail_configs (stmp, port, auth_code, email, status, creator)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (creator) DO UPDATE
            SET stmp = EXCLUDED.stmp,
                port = EXCLUDED.port,
                auth_code = EXCLUDED.auth_code,
                email = EXCLUDED.email,
                status = EXCLUDED.status,
                updated_at = NOW()
            RETURNING id, stmp, port, auth_code, email, status, creator, created_at, updated_at
            "#,
        )
        .bind(&data.stmp)
        .bind(data.port)
        .bind(&data.auth_code)
        .bind(&data.email)
        .bind(data.status)
        .bind(creator.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(MailConfig::from(row))
    }

    async fn delete(&self, creator: UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM mail_configs WHERE creator = $1")
            .bind(creator.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
