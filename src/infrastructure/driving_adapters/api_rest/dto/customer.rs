//! Customer DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{validate_optional_email, PageDto};
use crate::domain::models::customer::{Customer, CustomerData, CustomerOption, CustomerQuery};
use crate::domain::models::user::UserId;
use crate::shared::errors::DomainError;

/// DTO for `POST /customer/create`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CustomerDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 50, message = "source must be at most 50 characters"))]
    pub source: String,

    #[serde(default)]
    #[validate(length(max = 20, message = "phone must be at most 20 characters"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "email must be at most 100 characters"))]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 50, message = "industry must be at most 50 characters"))]
    pub industry: String,

    #[serde(default)]
    #[validate(length(max = 20, message = "level must be at most 20 characters"))]
    pub level: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "remarks must be at most 500 characters"))]
    pub remarks: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "region must be at most 100 characters"))]
    pub region: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "address must be at most 200 characters"))]
    pub address: String,

    #[serde(default = "default_status")]
    pub status: i16,
}

fn default_status() -> i16 {
    1
}

impl From<CustomerDto> for CustomerData {
    fn from(dto: CustomerDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            source: dto.source,
            phone: dto.phone,
            email: dto.email,
            industry: dto.industry,
            level: dto.level,
            remarks: dto.remarks,
            region: dto.region,
            address: dto.address,
            status: dto.status,
        }
    }
}

/// DTO for `PUT /customer/update`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCustomerDto {
    #[validate(range(min = 1, message = "id must be at least 1"))]
    pub id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub customer: CustomerDto,
}

/// DTO for `POST /customer/list`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CustomerListDto {
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: Option<String>,

    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageDto,
}

impl CustomerListDto {
    /// # Errors
    ///
    /// Returns `DomainError` for an invalid page.
    pub fn into_query(self, creator: UserId) -> Result<CustomerQuery, DomainError> {
        Ok(CustomerQuery {
            creator,
            name: self.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            page: self.page.page()?,
        })
    }
}

/// Customer response DTO
#[derive(Debug, Clone, Serialize)]
pub struct CustomerResponseDto {
    pub id: i64,
    pub name: String,
    pub source: String,
    pub phone: String,
    pub email: String,
    pub industry: String,
    pub level: String,
    pub remarks: String,
    pub region: String,
    pub address: String,
    pub status: i16,
    pub creator: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponseDto {
    fn from(customer: Customer) -> Self {
        let data = customer.data;
        Self {
            id: customer.id,
            name: data.name,
            source: data.source,
            phone: data.phone,
            email: data.email,
            industry: data.industry,
            level: data.level,
            remarks: data.remarks,
            region: data.region,
            address: data.address,
            status: data.status,
            creator: customer.creator.value(),
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

/// Entry of `GET /customer/option`
#[derive(Debug, Clone, Serialize)]
pub struct CustomerOptionDto {
    pub id: i64,
    pub name: String,
}

impl From<CustomerOption> for CustomerOptionDto {
    fn from(option: CustomerOption) -> Self {
        Self {
            id: option.id,
            name: option.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_dto_defaults_optional_fields() {
        let dto: CustomerDto = serde_json::from_value(json!({"name": "  Acme Ltd "})).unwrap();
        assert!(dto.validate().is_ok());

        let data = CustomerData::from(dto);
        assert_eq!(data.name, "Acme Ltd");
        assert!(data.phone.is_empty());
        assert_eq!(data.status, 1);
    }

    #[test]
    fn test_customer_dto_rejects_bad_email_and_empty_name() {
        let dto: CustomerDto =
            serde_json::from_value(json!({"name": "Acme", "email": "acme"})).unwrap();
        assert!(dto.validate().is_err());

        let dto: CustomerDto = serde_json::from_value(json!({"name": ""})).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_list_dto_drops_blank_name() {
        let dto: CustomerListDto =
            serde_json::from_value(json!({"name": "  ", "page_num": 2})).unwrap();
        let query = dto.into_query(UserId::new(5)).unwrap();
        assert!(query.name.is_none());
        assert_eq!(query.page.offset(), 10);
    }
}
