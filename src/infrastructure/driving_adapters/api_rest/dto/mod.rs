//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API, plus the shapes shared by
//! several endpoints (pagination, id lists, `?id=` queries).

pub mod contract;
pub mod customer;
pub mod file;
pub mod mail_config;
pub mod notice;
pub mod product;
pub mod user;

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidateEmail};

use crate::domain::models::page::{Page, DEFAULT_PAGE_SIZE};
use crate::shared::errors::DomainError;

pub use contract::{
    ContractDto, ContractListDto, ContractListItemDto, ContractProductDto, ContractResponseDto,
    UpdateContractDto,
};
pub use customer::{
    CustomerDto, CustomerListDto, CustomerOptionDto, CustomerResponseDto, UpdateCustomerDto,
};
pub use file::{FileInfoDto, RemoveFileDto};
pub use mail_config::{MailConfigDto, MailConfigResponseDto};
pub use notice::NoticeResponseDto;
pub use product::{ProductDto, ProductListDto, ProductResponseDto, UpdateProductDto};
pub use user::{
    DeleteAccountDto, LoginDto, LoginResponseDto, RegisterDto, ResetPasswordDto,
    SubscriptionResponseDto, UserInfoDto, VerifyCodeDto,
};

fn default_page_num() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Whole-unit bound of the `NUMERIC(14, 2)` money columns
const MONEY_INTEGER_DIGITS: u32 = 12;

/// Validates a money value: not negative, at most two decimals and small
/// enough for the money columns
pub(crate) fn validate_money(value: &Decimal) -> Result<(), validator::ValidationError> {
    let fail = |code: &'static str, message: &'static str| {
        let mut error = validator::ValidationError::new(code);
        error.message = Some(message.into());
        Err(error)
    };

    if value.is_sign_negative() && !value.is_zero() {
        return fail("non_negative", "Value must not be negative");
    }
    if value.normalize().scale() > 2 {
        return fail("money_scale", "Value must have at most two decimal places");
    }
    if value.trunc() >= Decimal::from(10_i64.pow(MONEY_INTEGER_DIGITS)) {
        return fail("money_range", "Value is too large");
    }
    Ok(())
}

/// Validates an email that may be left blank
pub(crate) fn validate_optional_email(email: &str) -> Result<(), validator::ValidationError> {
    if email.is_empty() || email.validate_email() {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("email");
        error.message = Some("Invalid email format".into());
        Err(error)
    }
}

/// Page request shared by every list endpoint
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PageDto {
    #[serde(default = "default_page_num")]
    #[validate(range(min = 1, message = "page_num must be at least 1"))]
    pub page_num: i64,

    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100, message = "page_size must be between 1 and 100"))]
    pub page_size: i64,
}

impl Default for PageDto {
    fn default() -> Self {
        Self {
            page_num: default_page_num(),
            page_size: default_page_size(),
        }
    }
}

impl PageDto {
    /// # Errors
    ///
    /// Returns `DomainError` for an out of range number or size.
    pub fn page(&self) -> Result<Page, DomainError> {
        Page::new(self.page_num, self.page_size)
    }
}

/// Batch delete / update request: `{"ids": [..]}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IdsDto {
    #[validate(length(min = 1, max = 1000, message = "ids must contain between 1 and 1000 items"))]
    pub ids: Vec<i64>,
}

/// `?id=` query of the detail endpoints
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IdQuery {
    #[validate(range(min = 1, message = "id must be at least 1"))]
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_page_defaults() {
        let dto: PageDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto.page_num, 1);
        assert_eq!(dto.page_size, 10);
        assert!(dto.validate().is_ok());
        assert_eq!(dto.page().unwrap().offset(), 0);
    }

    #[test]
    fn test_page_size_is_capped() {
        let dto = PageDto {
            page_num: 1,
            page_size: 101,
        };
        assert!(dto.validate().is_err());

        let dto = PageDto {
            page_num: 0,
            page_size: 10,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_ids_must_not_be_empty() {
        let dto: IdsDto = serde_json::from_str(r#"{"ids": []}"#).unwrap();
        assert!(dto.validate().is_err());

        let dto: IdsDto = serde_json::from_str(r#"{"ids": [4, 2]}"#).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_money_rejects_negative() {
        assert!(validate_money(&dec!(0)).is_ok());
        assert!(validate_money(&dec!(12.5)).is_ok());
        assert!(validate_money(&dec!(-0.01)).is_err());
    }

    #[test]
    fn test_money_rejects_more_than_two_decimals() {
        assert!(validate_money(&dec!(1.005)).is_err());
        // trailing zeros are not extra precision
        assert!(validate_money(&dec!(1.500)).is_ok());
    }

    #[test]
    fn test_money_rejects_values_beyond_column_range() {
        assert!(validate_money(&dec!(999999999999.99)).is_ok());
        assert!(validate_money(&dec!(1000000000000)).is_err());
        assert!(validate_money(&dec!(10000000000000)).is_err());
    }

    #[test]
    fn test_page_offset_overflow_is_rejected() {
        let dto = PageDto {
            page_num: i64::MAX,
            page_size: 100,
        };
        assert!(dto.validate().is_ok());
        assert!(dto.page().is_err());
    }

    #[test]
    fn test_optional_email() {
        assert!(validate_optional_email("").is_ok());
        assert!(validate_optional_email("buyer@acme.io").is_ok());
        assert!(validate_optional_email("not-an-email").is_err());
    }
}
