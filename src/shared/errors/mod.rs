//! Error Types
//!
//! Layered error types, each resolving to a response code. The HTTP
//! boundary always answers 200 and reports failures in the envelope.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::shared::envelope::Envelope;
use crate::shared::response_code::ResponseCode;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Contract period is invalid: over_time {over} is before begin_time {begin}")]
    InvalidPeriod { begin: String, over: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// A unique constraint rejected the write; holds the constraint name
    #[error("Unique constraint violated: {0}")]
    Duplicate(String),

    /// A foreign key rejected the write; holds the constraint name
    #[error("Foreign key constraint violated: {0}")]
    Referenced(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            let constraint = db.constraint().unwrap_or_default().to_string();
            if db.is_unique_violation() {
                return Self::Duplicate(constraint);
            }
            if db.is_foreign_key_violation() {
                return Self::Referenced(constraint);
            }
        }
        Self::Database(err)
    }
}

/// Errors raised by non-database gateways (cache, mail, files, tokens, hashing)
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Mail delivery error: {0}")]
    Mail(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Password hashing error: {0}")]
    Hashing(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("User with email '{0}' already exists")]
    UserExists(String),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("Wrong email or password")]
    InvalidCredentials,

    #[error("Verification code invalid for '{0}'")]
    VerifyCodeInvalid(String),

    #[error("Failed to send verification code: {0}")]
    VerifyCodeSendFailed(#[source] GatewayError),

    #[error("Failed to reset password: {0}")]
    PasswordResetFailed(#[source] RepositoryError),

    #[error("Customer '{0}' already exists")]
    CustomerExists(String),

    #[error("Customer with id {0} not found")]
    CustomerNotFound(i64),

    #[error("Customer is referenced by {0} contract(s)")]
    CustomerInUse(i64),

    #[error("Product '{0}' already exists")]
    ProductExists(String),

    #[error("Product with id {0} not found")]
    ProductNotFound(i64),

    #[error("Contract with id {0} not found")]
    ContractNotFound(i64),

    #[error("Mail configuration not found")]
    MailConfigNotFound,

    #[error("File upload failed: {0}")]
    FileUploadFailed(#[source] GatewayError),

    #[error("File remove failed: {0}")]
    FileRemoveFailed(#[source] GatewayError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl UseCaseError {
    /// Get the response code for this error
    #[must_use]
    pub fn response_code(&self) -> ResponseCode {
        match self {
            Self::Validation(_) | Self::Domain(_) => ResponseCode::ParamInvalid,
            Self::UserExists(_) => ResponseCode::UserHasExist,
            Self::UserNotFound(_) => ResponseCode::UserNotExist,
            Self::InvalidCredentials => ResponseCode::UserEmailOrPass,
            Self::VerifyCodeInvalid(_) => ResponseCode::VerifyCodeInvalid,
            Self::VerifyCodeSendFailed(_) => ResponseCode::VerifyCodeSendFailed,
            Self::PasswordResetFailed(_) => ResponseCode::UserPassResetFailed,
            Self::CustomerExists(_) => ResponseCode::CustomerHasExist,
            Self::CustomerNotFound(_) => ResponseCode::CustomerNotExist,
            Self::CustomerInUse(_) => ResponseCode::CustomerHasContract,
            Self::ProductExists(_) => ResponseCode::ProductHasExist,
            Self::ProductNotFound(_) => ResponseCode::ProductNotExist,
            Self::ContractNotFound(_) => ResponseCode::ContractNotExist,
            Self::MailConfigNotFound => ResponseCode::MailConfigNotExist,
            Self::FileUploadFailed(_) => ResponseCode::FileUploadFailed,
            Self::FileRemoveFailed(_) => ResponseCode::FileRemoveFailed,
            Self::Repository(_) | Self::Gateway(_) => ResponseCode::Failed,
        }
    }
}

/// API error returned by handlers and extractors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Get the response code for this error
    #[must_use]
    pub fn response_code(&self) -> ResponseCode {
        match self {
            Self::UseCase(err) => err.response_code(),
            Self::BadRequest(_) => ResponseCode::ParamInvalid,
            Self::Unauthorized(_) => ResponseCode::TokenInvalid,
            Self::Internal(_) => ResponseCode::Failed,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.response_code();

        if code == ResponseCode::Failed {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(code = code.code(), error = %self, "Request rejected");
        }

        Envelope::from_code(code).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::UseCase(UseCaseError::Domain(err))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_errors_map_to_their_codes() {
        assert_eq!(
            UseCaseError::UserExists("a@b.com".into()).response_code(),
            ResponseCode::UserHasExist
        );
        assert_eq!(
            UseCaseError::InvalidCredentials.response_code(),
            ResponseCode::UserEmailOrPass
        );
        assert_eq!(
            UseCaseError::ContractNotFound(7).response_code(),
            ResponseCode::ContractNotExist
        );
        assert_eq!(
            UseCaseError::CustomerInUse(2).response_code(),
            ResponseCode::CustomerHasContract
        );
    }

    #[test]
    fn test_infrastructure_errors_map_to_failed() {
        let err = UseCaseError::from(RepositoryError::NotFound("user".into()));
        assert_eq!(err.response_code(), ResponseCode::Failed);

        let err = UseCaseError::from(GatewayError::Cache("down".into()));
        assert_eq!(err.response_code(), ResponseCode::Failed);
    }

    #[test]
    fn test_non_database_sqlx_errors_stay_database_errors() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_domain_errors_map_to_param_invalid() {
        let err = UseCaseError::from(DomainError::InvalidValue {
            field: "amount",
            reason: "negative".into(),
        });
        assert_eq!(err.response_code(), ResponseCode::ParamInvalid);
    }

    #[test]
    fn test_api_errors_map_to_codes() {
        assert_eq!(
            ApiError::BadRequest("x".into()).response_code(),
            ResponseCode::ParamInvalid
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).response_code(),
            ResponseCode::TokenInvalid
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).response_code(),
            ResponseCode::Failed
        );
    }
}
