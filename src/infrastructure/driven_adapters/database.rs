//! Database Connection Management
//!
//! Utilities for creating and managing database connections.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::DatabaseConfig;
use super::postgres::{
    PostgresContractRepository, PostgresCustomerRepository, PostgresMailConfigRepository,
    PostgresNoticeRepository, PostgresProductRepository, PostgresSubscriptionRepository,
    PostgresUserRepository,
};
use crate::domain::gateways::{
    ContractRepository, CustomerRepository, MailConfigRepository, NoticeRepository,
    ProductRepository, SubscriptionRepository, UserRepository,
};

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns `sqlx::Error` if the database is unreachable.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await
}

/// Apply the embedded migrations
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` if a migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Every PostgreSQL repository, sharing one pool
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub notices: Arc<dyn NoticeRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub contracts: Arc<dyn ContractRepository>,
    pub mail_configs: Arc<dyn MailConfigRepository>,
}

impl Repositories {
    #[must_use]
    pub fn new(pool: &PgPool) -> Self {
        Self {
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            subscriptions: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
            notices: Arc::new(PostgresNoticeRepository::new(pool.clone())),
            customers: Arc::new(PostgresCustomerRepository::new(pool.clone())),
            products: Arc::new(PostgresProductRepository::new(pool.clone())),
            contracts: Arc::new(PostgresContractRepository::new(pool.clone())),
            mail_configs: Arc::new(PostgresMailConfigRepository::new(pool.clone())),
        }
    }
}
