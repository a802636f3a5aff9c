//! Response Codes
//!
//! Every API outcome is reported as a numeric code inside the response
//! envelope. The message for each code comes from a fixed table.

use serde::{Serialize, Serializer};

/// Numeric outcome codes carried in the `code` field of every response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ResponseCode {
    Success = 0,

    Failed = 10001,
    ParamInvalid = 10002,
    TokenInvalid = 10003,
    TooManyRequests = 10004,

    UserHasExist = 20001,
    UserNotExist = 20002,
    UserEmailOrPass = 20003,
    VerifyCodeInvalid = 20004,
    VerifyCodeSendFailed = 20005,
    UserPassResetFailed = 20006,

    CustomerHasExist = 30001,
    CustomerNotExist = 30002,
    CustomerHasContract = 30003,

    ProductHasExist = 40001,
    ProductNotExist = 40002,

    ContractNotExist = 50001,

    MailConfigNotExist = 60001,

    FileUploadFailed = 70001,
    FileRemoveFailed = 70002,
}

impl ResponseCode {
    /// Numeric value written to the envelope
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Human readable message for this code
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "operation failed",
            Self::ParamInvalid => "invalid parameters",
            Self::TokenInvalid => "token invalid or expired",
            Self::TooManyRequests => "too many requests",
            Self::UserHasExist => "user already exists",
            Self::UserNotExist => "user does not exist",
            Self::UserEmailOrPass => "wrong email or password",
            Self::VerifyCodeInvalid => "verification code invalid",
            Self::VerifyCodeSendFailed => "failed to send verification code",
            Self::UserPassResetFailed => "failed to reset password",
            Self::CustomerHasExist => "customer already exists",
            Self::CustomerNotExist => "customer does not exist",
            Self::CustomerHasContract => "customer is referenced by a contract",
            Self::ProductHasExist => "product already exists",
            Self::ProductNotExist => "product does not exist",
            Self::ContractNotExist => "contract does not exist",
            Self::MailConfigNotExist => "mail configuration does not exist",
            Self::FileUploadFailed => "file upload failed",
            Self::FileRemoveFailed => "file remove failed",
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl Serialize for ResponseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

impl std::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}
