//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - PostgreSQL repositories
//! - Verification code stores (redis, in-memory)
//! - Mail delivery, local file storage, password hashing and tokens
//! - Configuration

pub mod config;
pub mod database;
pub mod file_storage;
pub mod mailer;
pub mod postgres;
pub mod security;
pub mod verify_code;

pub use config::AppConfig;
pub use file_storage::LocalFileStorage;
pub use mailer::{HttpMailer, LogMailer};
pub use postgres::{
    PostgresContractRepository, PostgresCustomerRepository, PostgresMailConfigRepository,
    PostgresNoticeRepository, PostgresProductRepository, PostgresSubscriptionRepository,
    PostgresUserRepository,
};
pub use security::{Argon2PasswordHasher, JwtTokenService};
pub use verify_code::{InMemoryVerifyCodeStore, RedisVerifyCodeStore};
