//! PostgreSQL Customer Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::like_pattern;
use crate::domain::gateways::CustomerRepository;
use crate::domain::models::customer::{Customer, CustomerData, CustomerOption, CustomerQuery};
use crate::domain::models::page::Paged;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

/// Database row representation for customers table
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    source: String,
    phone: String,
    email: String,
    industry: String,
    level: String,
    remarks: String,
    region: String,
    address: String,
    status: i16,
    creator: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            data: CustomerData {
                name: row.name,
                source: row.source,
                phone: row.phone,
                email: row.email,
                industry: row.industry,
                level: row.level,
                remarks: row.remarks,
                region: row.region,
                address: row.address,
                status: row.status,
            },
            creator: UserId::new(row.creator),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const CUSTOMER_COLUMNS: &str = "id, name, source, phone, email, industry, level, remarks, \
     region, address, status, creator, created_at, updated_at";

/// PostgreSQL implementation of CustomerRepository
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn create(&self, creator: UserId, data: &CustomerData) -> Result<Customer, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            r#"
            INSERT INTO customers (
                name, source, phone, email, industry, level, remarks, region, address, status, creator
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(&data.name)
        .bind(&data.source)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.industry)
        .bind(&data.level)
        .bind(&data.remarks)
        .bind(&data.region)
        .bind(&data.address)
        .bind(data.status)
        .bind(creator.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(Customer::from(row))
    }

    async fn update(
        &self,
        creator: UserId,
        id: i64,
        data: &CustomerData,
    ) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            r#"
            UPDATE customers
            SET name = $3,
                source = $4,
                phone = $5,
                email = $6,
                industry = $7,
                level = $8,
                remarks = $9,
                region = $10,
                address = $11,
                status = $12,
                updated_at = NOW()
            WHERE id = $1 AND creator = $2
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(creator.value())
        .bind(&data.name)
        .bind(&data.source)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.industry)
        .bind(&data.level)
        .bind(&data.remarks)
        .bind(&data.region)
        .bind(&data.address)
        .bind(data.status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn delete(&self, creator: UserId, ids: &[i64]) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM customers WHERE creator = $1 AND id = ANY($2)")
            .bind(creator.value())
            .bind(ids)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_by_id(&self, creator: UserId, id: i64) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1 AND creator = $2"
        ))
        .bind(id)
        .bind(creator.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn exists_by_name(
        &self,
        creator: UserId,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM customers
                WHERE creator = $1 AND name = $2 AND ($3::BIGINT IS NULL OR id != $3)
            )
            "#,
        )
        .bind(creator.value())
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn list(&self, query: &CustomerQuery) -> Result<Paged<Customer>, RepositoryError> {
        let pattern = query.name.as_deref().map(like_pattern);

        let rows = sqlx::query_as::<_, CustomerRow>(&format!(
            r#"
            SELECT {CUSTOMER_COLUMNS}
            FROM customers
            WHERE creator = $1 AND ($2::TEXT IS NULL OR name ILIKE $2)
            ORDER BY id DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(query.creator.value())
        .bind(pattern.as_deref())
        .bind(query.page.limit())
        .bind(query.page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM customers
            WHERE creator = $1 AND ($2::TEXT IS NULL OR name ILIKE $2)
            "#,
        )
        .bind(query.creator.value())
        .bind(pattern.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(Paged {
            total,
            items: rows.into_iter().map(Customer::from).collect(),
        })
    }

    async fn options(&self, creator: UserId) -> Result<Vec<CustomerOption>, RepositoryError> {
        let rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, name FROM customers WHERE creator = $1 ORDER BY name ASC",
        )
        .bind(creator.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| CustomerOption { id, name })
            .collect())
    }
}
