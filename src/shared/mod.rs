//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod envelope;
pub mod errors;
pub mod response_code;

pub use envelope::{Envelope, PageData};
pub use errors::{ApiError, DomainError, GatewayError, RepositoryError, UseCaseError};
pub use response_code::ResponseCode;
