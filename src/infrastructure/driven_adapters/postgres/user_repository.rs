//! PostgreSQL User Repository Implementation
//!
//! Implements the UserRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{User, UserId, UserProfile};
use crate::shared::errors::RepositoryError;

/// Database row representation for users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::restore(
            UserId::new(row.id),
            row.email,
            row.password,
            row.name,
            row.created_at,
            row.updated_at,
        )
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: i64,
    email: String,
    name: String,
    version: Option<i16>,
    expired_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new PostgresUserRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password, name, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password, name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_profile(&self, id: UserId) -> Result<Option<UserProfile>, RepositoryError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT u.id, u.email, u.name, s.version, s.expired_at, u.created_at
            FROM users u
            LEFT JOIN subscriptions s ON s.uid = u.id
            WHERE u.id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| UserProfile {
            id: UserId::new(row.id),
            email: row.email,
            name: row.name,
            version: row.version,
            expired_at: row.expired_at,
            created_at: row.created_at,
        }))
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, $2)
            RETURNING id, email, password, name, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(User::from(row))
    }

    async fn update_password(&self, email: &str, password_hash: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password = $2, updated_at = NOW()
            WHERE email = $1
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_account(&self, id: UserId) -> Result<bool, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // Contracts first: they reference customers with ON DELETE RESTRICT
        for statement in [
            "DELETE FROM contracts WHERE creator = $1",
            "DELETE FROM products WHERE creator = $1",
            "DELETE FROM customers WHERE creator = $1",
            "DELETE FROM notices WHERE creator = $1",
            "DELETE FROM mail_configs WHERE creator = $1",
            "DELETE FROM subscriptions WHERE uid = $1",
        ] {
            sqlx::query(statement).bind(id.value()).execute(&mut *tx).await?;
        }

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
