//! Product Domain Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::page::Page;
use super::user::UserId;
use crate::shared::errors::DomainError;

pub const PRODUCT_ON_SALE: i16 = 1;
pub const PRODUCT_OFF_SALE: i16 = 2;

/// Editable product fields
#[derive(Debug, Clone)]
pub struct ProductData {
    pub name: String,
    pub kind: i16,
    pub unit: String,
    pub code: String,
    pub price: Decimal,
    pub description: String,
    pub status: i16,
}

impl ProductData {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` for a negative price or unknown status.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(DomainError::InvalidValue {
                field: "price",
                reason: "must not be negative".to_string(),
            });
        }
        if self.status != PRODUCT_ON_SALE && self.status != PRODUCT_OFF_SALE {
            return Err(DomainError::InvalidValue {
                field: "status",
                reason: format!("unknown product status {}", self.status),
            });
        }
        Ok(())
    }
}

/// Product entity as stored
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub data: ProductData,
    pub creator: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product list query
#[derive(Debug, Clone)]
pub struct ProductQuery {
    pub creator: UserId,
    pub name: Option<String>,
    pub status: Option<i16>,
    pub page: Page,
}
