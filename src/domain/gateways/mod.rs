//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod contract_repository;
pub mod customer_repository;
pub mod file_storage;
pub mod mail_config_repository;
pub mod mailer;
pub mod notice_repository;
pub mod product_repository;
pub mod security;
pub mod subscription_repository;
pub mod user_repository;
pub mod verify_code_store;

pub use contract_repository::ContractRepository;
pub use customer_repository::CustomerRepository;
pub use file_storage::FileStorage;
pub use mail_config_repository::MailConfigRepository;
pub use mailer::{MailMessage, Mailer};
pub use notice_repository::NoticeRepository;
pub use product_repository::ProductRepository;
pub use security::{PasswordHasher, TokenService};
pub use subscription_repository::SubscriptionRepository;
pub use user_repository::UserRepository;
pub use verify_code_store::VerifyCodeStore;
