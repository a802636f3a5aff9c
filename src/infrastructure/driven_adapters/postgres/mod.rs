//! PostgreSQL Repositories
//!
//! One repository per aggregate, all backed by the shared `PgPool`.

mod contract_repository;
mod customer_repository;
mod mail_config_repository;
mod notice_repository;
mod product_repository;
mod subscription_repository;
mod user_repository;

pub use contract_repository::PostgresContractRepository;
pub use customer_repository::PostgresCustomerRepository;
pub use mail_config_repository::PostgresMailConfigRepository;
pub use notice_repository::PostgresNoticeRepository;
pub use product_repository::PostgresProductRepository;
pub use subscription_repository::PostgresSubscriptionRepository;
pub use user_repository::PostgresUserRepository;

/// Case-insensitive substring pattern with LIKE wildcards escaped
fn like_pattern(term: &str) -> String {
    let escaped = term
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("acme"), "%acme%");
        assert_eq!(like_pattern(" 50%_off "), "%50\\%\\_off%");
    }
}
