//! PostgreSQL Product Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::like_pattern;
use crate::domain::gateways::ProductRepository;
use crate::domain::models::page::Paged;
use crate::domain::models::product::{Product, ProductData, ProductQuery};
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    #[sqlx(rename = "type")]
    kind: i16,
    unit: String,
    code: String,
    price: Decimal,
    description: String,
    status: i16,
    creator: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            data: ProductData {
                name: row.name,
                kind: row.kind,
                unit: row.unit,
                code: row.code,
                price: row.price,
                description: row.description,
                status: row.status,
            },
            creator: UserId::new(row.creator),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const PRODUCT_COLUMNS: &str =
    "id, name, type, unit, code, price, description, status, creator, created_at, updated_at";

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, creator: UserId, data: &ProductData) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            INSERT INTO products (name, type, unit, code, price, description, status, creator)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(&data.name)
        .bind(data.kind)
        .bind(&data.unit)
        .bind(&data.code)
        .bind(data.price)
        .bind(&data.description)
        .bind(data.status)
        .bind(creator.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(Product::from(row))
    }

    async fn update(
        &self,
        creator: UserId,
        id: i64,
        data: &ProductData,
    ) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            UPDATE products
            SET name = $3,
                type = $4,
                unit = $5,
                code = $6,
                price = $7,
                description = $8,
                status = $9,
                updated_at = NOW()
            WHERE id = $1 AND creator = $2
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(creator.value())
        .bind(&data.name)
        .bind(data.kind)
        .bind(&data.unit)
        .bind(&data.code)
        .bind(data.price)
        .bind(&data.description)
        .bind(data.status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn delete(&self, creator: UserId, ids: &[i64]) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE creator = $1 AND id = ANY($2)")
            .bind(creator.value())
            .bind(ids)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_by_id(&self, creator: UserId, id: i64) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 AND creator = $2"
        ))
        .bind(id)
        .bind(creator.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
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
                SELECT 1 FROM products
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

    async fn list(&self, query: &ProductQuery) -> Result<Paged<Product>, RepositoryError> {
        let pattern = query.name.as_deref().map(like_pattern);

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE creator = $1
              AND ($2::TEXT IS NULL OR name ILIKE $2)
              AND ($3::SMALLINT IS NULL OR status = $3)
            ORDER BY id DESC
            LIMIT $4 OFFSET $5
            "#
        ))
        .bind(query.creator.value())
        .bind(pattern.as_deref())
        .bind(query.status)
        .bind(query.page.limit())
        .bind(query.page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM products
            WHERE creator = $1
              AND ($2::TEXT IS NULL OR name ILIKE $2)
              AND ($3::SMALLINT IS NULL OR status = $3)
            "#,
        )
        .bind(query.creator.value())
        .bind(pattern.as_deref())
        .bind(query.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paged {
            total,
            items: rows.into_iter().map(Product::from).collect(),
        })
    }
}
