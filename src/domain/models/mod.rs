//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod contract;
pub mod customer;
pub mod file;
pub mod mail_config;
pub mod notice;
pub mod page;
pub mod product;
pub mod subscription;
pub mod user;

pub use contract::{
    Contract, ContractData, ContractFilter, ContractListItem, ContractProduct, ContractQuery,
    ContractStatus,
};
pub use customer::{Customer, CustomerData, CustomerOption, CustomerQuery};
pub use file::FileInfo;
pub use mail_config::{MailConfig, MailConfigData};
pub use notice::{Notice, NoticeQuery, NoticeStatus};
pub use page::{Page, Paged};
pub use product::{Product, ProductData, ProductQuery};
pub use subscription::Subscription;
pub use user::{
    Credentials, DeleteAccountData, RegisterUserData, ResetPasswordData, Session, User, UserId,
    UserProfile,
};
