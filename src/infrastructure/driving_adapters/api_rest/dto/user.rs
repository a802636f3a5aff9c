//! User DTOs
//!
//! Data transfer objects for account endpoints.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;
use zeroize::Zeroizing;

use crate::domain::models::subscription::Subscription;
use crate::domain::models::user::{
    Credentials, DeleteAccountData, RegisterUserData, ResetPasswordData, Session, UserId,
    UserProfile,
};

lazy_static! {
    /// Verification codes are exactly six digits
    static ref VERIFY_CODE_REGEX: Regex = Regex::new(r"^\d{6}$").expect("valid regex");
}

/// Validates the verification code format
fn validate_verify_code(code: &str) -> Result<(), validator::ValidationError> {
    if VERIFY_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("verify_code");
        error.message = Some("Verification code must be 6 digits".into());
        Err(error)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// DTO for `POST /user/register`
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 32, message = "password must be between 6 and 32 characters"))]
    pub password: String,

    #[validate(custom(function = "validate_verify_code"))]
    pub code: String,
}

impl From<RegisterDto> for RegisterUserData {
    fn from(dto: RegisterDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: Zeroizing::new(dto.password),
            code: dto.code,
        }
    }
}

/// DTO for `POST /user/login`
#[derive(Clone, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 32, message = "password must be between 6 and 32 characters"))]
    pub password: String,
}

impl From<LoginDto> for Credentials {
    fn from(dto: LoginDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: Zeroizing::new(dto.password),
        }
    }
}

/// DTO for `POST /user/verifycode`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyCodeDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

impl VerifyCodeDto {
    #[must_use]
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }
}

/// DTO for `POST /user/forgotpass`
#[derive(Clone, Deserialize, Validate)]
pub struct ResetPasswordDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 32, message = "password must be between 6 and 32 characters"))]
    pub password: String,

    #[validate(custom(function = "validate_verify_code"))]
    pub code: String,
}

impl From<ResetPasswordDto> for ResetPasswordData {
    fn from(dto: ResetPasswordDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: Zeroizing::new(dto.password),
            code: dto.code,
        }
    }
}

/// DTO for `POST /user/delete`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteAccountDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "validate_verify_code"))]
    pub code: String,
}

impl DeleteAccountDto {
    #[must_use]
    pub fn into_data(self, uid: UserId) -> DeleteAccountData {
        DeleteAccountData {
            uid,
            email: normalize_email(&self.email),
            code: self.code,
        }
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponseDto {
    pub uid: i64,
    pub token: String,
}

impl From<Session> for LoginResponseDto {
    fn from(session: Session) -> Self {
        Self {
            uid: session.uid.value(),
            token: session.token,
        }
    }
}

/// Account details of `GET /user/info`
#[derive(Debug, Clone, Serialize)]
pub struct UserInfoDto {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub version: Option<i16>,
    pub expired_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserInfoDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.value(),
            email: profile.email,
            name: profile.name,
            version: profile.version,
            expired_at: profile.expired_at,
            created_at: profile.created_at,
        }
    }
}

/// Subscription of `GET /subscribe/info`
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponseDto {
    pub uid: i64,
    pub version: i16,
    pub expired_at: Option<DateTime<Utc>>,
}

impl From<Subscription> for SubscriptionResponseDto {
    fn from(subscription: Subscription) -> Self {
        Self {
            uid: subscription.uid.value(),
            version: subscription.version,
            expired_at: subscription.expired_at,
        }
    }
}
