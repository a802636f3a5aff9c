//! Product DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{validate_money, PageDto};
use crate::domain::models::product::{Product, ProductData, ProductQuery};
use crate::domain::models::user::UserId;
use crate::shared::errors::DomainError;

/// DTO for `POST /product/create`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: i16,

    #[serde(default)]
    #[validate(length(max = 20, message = "unit must be at most 20 characters"))]
    pub unit: String,

    #[serde(default)]
    #[validate(length(max = 50, message = "code must be at most 50 characters"))]
    pub code: String,

    #[validate(custom(function = "validate_money"))]
    pub price: Decimal,

    #[serde(default)]
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: String,

    #[validate(range(min = 1, max = 2, message = "status must be 1 (on sale) or 2 (off sale)"))]
    pub status: i16,
}

impl From<ProductDto> for ProductData {
    fn from(dto: ProductDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            kind: dto.kind,
            unit: dto.unit,
            code: dto.code,
            price: dto.price,
            description: dto.description,
            status: dto.status,
        }
    }
}

/// DTO for `PUT /product/update`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProductDto {
    #[validate(range(min = 1, message = "id must be at least 1"))]
    pub id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub product: ProductDto,
}

/// DTO for `POST /product/list`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductListDto {
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 1, max = 2, message = "status must be 1 (on sale) or 2 (off sale)"))]
    pub status: Option<i16>,

    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageDto,
}

impl ProductListDto {
    /// # Errors
    ///
    /// Returns `DomainError` for an invalid page.
    pub fn into_query(self, creator: UserId) -> Result<ProductQuery, DomainError> {
        Ok(ProductQuery {
            creator,
            name: self.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            status: self.status,
            page: self.page.page()?,
        })
    }
}

/// Product response DTO
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponseDto {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: i16,
    pub unit: String,
    pub code: String,
    pub price: Decimal,
    pub description: String,
    pub status: i16,
    pub creator: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponseDto {
    fn from(product: Product) -> Self {
        let data = product.data;
        Self {
            id: product.id,
            name: data.name,
            kind: data.kind,
            unit: data.unit,
            code: data.code,
            price: data.price,
            description: data.description,
            status: data.status,
            creator: product.creator.value(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
