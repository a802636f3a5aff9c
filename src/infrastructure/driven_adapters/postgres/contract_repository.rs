//! PostgreSQL Contract Repository Implementation
//!
//! Contracts store their product lines as JSONB. The list query joins
//! customers and is assembled with `QueryBuilder` so the page query and the
//! count query always share the same predicates.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::gateways::ContractRepository;
use crate::domain::models::contract::{
    Contract, ContractData, ContractFilter, ContractListItem, ContractProduct, ContractQuery,
    ContractStatus,
};
use crate::domain::models::page::Paged;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

/// Database row representation for contracts table
#[derive(Debug, sqlx::FromRow)]
struct ContractRow {
    id: i64,
    name: String,
    amount: Decimal,
    begin_time: NaiveDate,
    over_time: NaiveDate,
    remarks: String,
    cid: i64,
    product_list: serde_json::Value,
    status: i16,
    creator: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContractRow> for Contract {
    type Error = RepositoryError;

    fn try_from(row: ContractRow) -> Result<Self, Self::Error> {
        let product_list: Vec<ContractProduct> = serde_json::from_value(row.product_list)
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse product_list: {e}")))?;

        Ok(Contract::restore(
            row.id,
            ContractData {
                name: row.name,
                amount: row.amount,
                begin_time: row.begin_time,
                over_time: row.over_time,
                remarks: row.remarks,
                cid: row.cid,
                product_list,
                status: parse_status(row.status)?,
            },
            UserId::new(row.creator),
            row.created_at,
            row.updated_at,
        ))
    }
}

/// Row of the contract ⋈ customer list query
#[derive(Debug, sqlx::FromRow)]
struct ContractListRow {
    id: i64,
    name: String,
    amount: Decimal,
    begin_time: NaiveDate,
    over_time: NaiveDate,
    cname: String,
    remarks: String,
    status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContractListRow> for ContractListItem {
    type Error = RepositoryError;

    fn try_from(row: ContractListRow) -> Result<Self, Self::Error> {
        Ok(ContractListItem {
            id: row.id,
            name: row.name,
            amount: row.amount,
            begin_time: row.begin_time,
            over_time: row.over_time,
            cname: row.cname,
            remarks: row.remarks,
            status: parse_status(row.status)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn parse_status(value: i16) -> Result<ContractStatus, RepositoryError> {
    ContractStatus::try_from(value).map_err(|e| RepositoryError::Mapping(e.to_string()))
}

fn product_list_json(products: &[ContractProduct]) -> Result<serde_json::Value, RepositoryError> {
    serde_json::to_value(products)
        .map_err(|e| RepositoryError::Mapping(format!("Failed to serialize product_list: {e}")))
}

const CONTRACT_COLUMNS: &str = "id, name, amount, begin_time, over_time, remarks, cid, \
     product_list, status, creator, created_at, updated_at";

const LIST_FROM: &str = " FROM contracts c INNER JOIN customers cu ON c.cid = cu.id";

/// Owner predicate plus at most one of id or status
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ContractQuery) {
    builder.push(" WHERE c.creator = ");
    builder.push_bind(query.creator.value());
    match query.filter {
        ContractFilter::All => {}
        ContractFilter::ById(id) => {
            builder.push(" AND c.id = ");
            builder.push_bind(id);
        }
        ContractFilter::ByStatus(status) => {
            builder.push(" AND c.status = ");
            builder.push_bind(status.value());
        }
    }
}

fn list_query(query: &ContractQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT c.id, c.name, c.amount, c.begin_time, c.over_time, cu.name AS cname, \
         c.remarks, c.status, c.created_at, c.updated_at",
    );
    builder.push(LIST_FROM);
    push_filters(&mut builder, query);
    builder.push(" ORDER BY c.id DESC LIMIT ");
    builder.push_bind(query.page.limit());
    builder.push(" OFFSET ");
    builder.push_bind(query.page.offset());
    builder
}

fn count_query(query: &ContractQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*)");
    builder.push(LIST_FROM);
    push_filters(&mut builder, query);
    builder
}

/// PostgreSQL implementation of ContractRepository
pub struct PostgresContractRepository {
    pool: PgPool,
}

impl PostgresContractRepository {
    /// Create a new PostgresContractRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContractRepository for PostgresContractRepository {
    async fn create(&self, creator: UserId, data: &ContractData) -> Result<Contract, RepositoryError> {
        let product_list = product_list_json(&data.product_list)?;

        let row = sqlx::query_as::<_, ContractRow>(&format!(
            r#"
            INSERT INTO contracts (
                name, amount, begin_time, over_time, remarks, cid, product_list, status, creator
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {CONTRACT_COLUMNS}
            "#
        ))
        .bind(&data.name)
        .bind(data.amount)
        .bind(data.begin_time)
        .bind(data.over_time)
        .bind(&data.remarks)
        .bind(data.cid)
        .bind(&product_list)
        .bind(data.status.value())
        .bind(creator.value())
        .fetch_one(&self.pool)
        .await?;

        Contract::try_from(row)
    }

    async fn update(
        &self,
        creator: UserId,
        id: i64,
        data: &ContractData,
    ) -> Result<Option<Contract>, RepositoryError> {
        let product_list = product_list_json(&data.product_list)?;

        let row = sqlx::query_as::<_, ContractRow>(&format!(
            r#"
            UPDATE contracts
            SET name = $3,
                amount = $4,
                begin_time = $5,
                over_time = $6,
                remarks = $7,
                cid = $8,
                product_list = $9,
                status = $10,
                updated_at = NOW()
            WHERE id = $1 AND creator = $2
            RETURNING {CONTRACT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(creator.value())
        .bind(&data.name)
        .bind(data.amount)
        .bind(data.begin_time)
        .bind(data.over_time)
        .bind(&data.remarks)
        .bind(data.cid)
        .bind(&product_list)
        .bind(data.status.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Contract::try_from).transpose()
    }

    async fn delete(&self, creator: UserId, ids: &[i64]) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM contracts WHERE creator = $1 AND id = ANY($2)")
            .bind(creator.value())
            .bind(ids)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_by_id(&self, creator: UserId, id: i64) -> Result<Option<Contract>, RepositoryError> {
        let row = sqlx::query_as::<_, ContractRow>(&format!(
            "SELECT {CONTRACT_COLUMNS} FROM contracts WHERE id = $1 AND creator = $2"
        ))
        .bind(id)
        .bind(creator.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Contract::try_from).transpose()
    }

    async fn list(&self, query: &ContractQuery) -> Result<Paged<ContractListItem>, RepositoryError> {
        let rows = list_query(query)
            .build_query_as::<ContractListRow>()
            .fetch_all(&self.pool)
            .await?;

        let total = count_query(query)
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        let items = rows
            .into_iter()
            .map(ContractListItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paged { total, items })
    }

    async fn count_by_customers(&self, creator: UserId, cids: &[i64]) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM contracts WHERE creator = $1 AND cid = ANY($2)",
        )
        .bind(creator.value())
        .bind(cids)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
