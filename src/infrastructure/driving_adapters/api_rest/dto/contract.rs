//! Contract DTOs
//!
//! Data transfer objects for contract API endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{validate_money, PageDto};
use crate::domain::models::contract::{
    Contract, ContractData, ContractFilter, ContractListItem, ContractProduct, ContractQuery,
    ContractStatus,
};
use crate::domain::models::user::UserId;
use crate::shared::errors::DomainError;

/// One product line of a contract
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ContractProductDto {
    #[validate(range(min = 1, message = "product id must be at least 1"))]
    pub id: i64,

    #[validate(length(max = 100, message = "product name must be at most 100 characters"))]
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

    #[validate(range(min = 0, message = "count must not be negative"))]
    pub count: i32,

    #[validate(custom(function = "validate_money"))]
    pub total: Decimal,
}

impl From<ContractProductDto> for ContractProduct {
    fn from(dto: ContractProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            kind: dto.kind,
            unit: dto.unit,
            code: dto.code,
            price: dto.price,
            count: dto.count,
            total: dto.total,
        }
    }
}

impl From<ContractProduct> for ContractProductDto {
    fn from(product: ContractProduct) -> Self {
        Self {
            id: product.id,
            name: product.name,
            kind: product.kind,
            unit: product.unit,
            code: product.code,
            price: product.price,
            count: product.count,
            total: product.total,
        }
    }
}

/// DTO for `POST /contract/create`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContractDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_money"))]
    pub amount: Decimal,

    pub begin_time: NaiveDate,

    pub over_time: NaiveDate,

    #[serde(default)]
    #[validate(length(max = 500, message = "remarks must be at most 500 characters"))]
    pub remarks: String,

    #[validate(range(min = 1, message = "cid must be at least 1"))]
    pub cid: i64,

    #[serde(rename = "productlist", default)]
    #[validate(length(max = 200, message = "productlist can have at most 200 items"))]
    #[validate(nested)]
    pub product_list: Vec<ContractProductDto>,

    #[validate(range(min = 1, max = 2, message = "status must be 1 (signed) or 2 (unsigned)"))]
    pub status: i16,
}

impl TryFrom<ContractDto> for ContractData {
    type Error = DomainError;

    fn try_from(dto: ContractDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name,
            amount: dto.amount,
            begin_time: dto.begin_time,
            over_time: dto.over_time,
            remarks: dto.remarks,
            cid: dto.cid,
            product_list: dto.product_list.into_iter().map(ContractProduct::from).collect(),
            status: ContractStatus::try_from(dto.status)?,
        })
    }
}

/// DTO for `PUT /contract/update`: the id plus every editable field
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateContractDto {
    #[validate(range(min = 1, message = "id must be at least 1"))]
    pub id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub contract: ContractDto,
}

/// DTO for `POST /contract/list`
///
/// `id` takes precedence over `status` when both are present.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContractListDto {
    #[validate(range(min = 1, message = "id must be at least 1"))]
    pub id: Option<i64>,

    #[validate(range(min = 1, max = 2, message = "status must be 1 (signed) or 2 (unsigned)"))]
    pub status: Option<i16>,

    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageDto,
}

impl ContractListDto {
    /// # Errors
    ///
    /// Returns `DomainError` for an unknown status or an invalid page.
    pub fn into_query(self, creator: UserId) -> Result<ContractQuery, DomainError> {
        let status = self.status.map(ContractStatus::try_from).transpose()?;
        Ok(ContractQuery {
            creator,
            filter: ContractFilter::from_parts(self.id, status),
            page: self.page.page()?,
        })
    }
}

/// Contract response DTO
#[derive(Debug, Clone, Serialize)]
pub struct ContractResponseDto {
    pub id: i64,
    pub name: String,
    pub amount: Decimal,
    pub begin_time: NaiveDate,
    pub over_time: NaiveDate,
    pub remarks: String,
    pub cid: i64,
    #[serde(rename = "productlist")]
    pub product_list: Vec<ContractProductDto>,
    pub status: i16,
    pub creator: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contract> for ContractResponseDto {
    fn from(contract: Contract) -> Self {
        Self {
            id: contract.id(),
            name: contract.name().to_string(),
            amount: contract.amount(),
            begin_time: contract.begin_time(),
            over_time: contract.over_time(),
            remarks: contract.remarks().to_string(),
            cid: contract.cid(),
            product_list: contract
                .product_list()
                .iter()
                .cloned()
                .map(ContractProductDto::from)
                .collect(),
            status: contract.status().value(),
            creator: contract.creator().value(),
            created_at: contract.created_at(),
            updated_at: contract.updated_at(),
        }
    }
}

/// Row of the contract list, carrying the customer name
#[derive(Debug, Clone, Serialize)]
pub struct ContractListItemDto {
    pub id: i64,
    pub name: String,
    pub amount: Decimal,
    pub begin_time: NaiveDate,
    pub over_time: NaiveDate,
    pub cname: String,
    pub remarks: String,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContractListItem> for ContractListItemDto {
    fn from(item: ContractListItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            amount: item.amount,
            begin_time: item.begin_time,
            over_time: item.over_time,
            cname: item.cname,
            remarks: item.remarks,
            status: item.status.value(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn contract_json() -> serde_json::Value {
        json!({
            "name": "Annual support",
            "amount": "1200.50",
            "begin_time": "2024-01-01",
            "over_time": "2024-12-31",
            "remarks": "",
            "cid": 4,
            "productlist": [
                {"id": 9, "name": "Seat", "type": 1, "unit": "seat", "code": "S-1",
                 "price": "100.00", "count": 12, "total": "1200.00"}
            ],
            "status": 1
        })
    }

    #[test]
    fn test_contract_dto_parses_wire_names() {
        let dto: ContractDto = serde_json::from_value(contract_json()).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.product_list.len(), 1);
        assert_eq!(dto.product_list[0].kind, 1);

        let data = ContractData::try_from(dto).unwrap();
        assert_eq!(data.amount, dec!(1200.50));
        assert_eq!(data.status, ContractStatus::Signed);
        assert_eq!(data.product_list[0].total, dec!(1200.00));
    }

    #[test]
    fn test_contract_dto_rejects_bad_values() {
        let mut value = contract_json();
        value["status"] = json!(3);
        let dto: ContractDto = serde_json::from_value(value).unwrap();
        assert!(dto.validate().is_err());

        let mut value = contract_json();
        value["amount"] = json!("-1");
        let dto: ContractDto = serde_json::from_value(value).unwrap();
        assert!(dto.validate().is_err());

        let mut value = contract_json();
        value["productlist"][0]["count"] = json!(-2);
        let dto: ContractDto = serde_json::from_value(value).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_contract_dto_rejects_amounts_the_column_cannot_hold() {
        let mut value = contract_json();
        value["amount"] = json!("1.005");
        let dto: ContractDto = serde_json::from_value(value).unwrap();
        assert!(dto.validate().is_err());

        let mut value = contract_json();
        value["amount"] = json!("10000000000000");
        let dto: ContractDto = serde_json::from_value(value).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_dto_flattens_fields() {
        let mut value = contract_json();
        value["id"] = json!(17);
        let dto: UpdateContractDto = serde_json::from_value(value).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.id, 17);
        assert_eq!(dto.contract.cid, 4);
    }

    #[test]
    fn test_list_dto_builds_filter() {
        let dto: ContractListDto =
            serde_json::from_value(json!({"status": 2, "page_num": 3, "page_size": 5})).unwrap();
        assert!(dto.validate().is_ok());
        let query = dto.into_query(UserId::new(1)).unwrap();
        assert_eq!(query.filter, ContractFilter::ByStatus(ContractStatus::Unsigned));
        assert_eq!(query.page.offset(), 10);

        let dto: ContractListDto = serde_json::from_value(json!({"id": 8, "status": 1})).unwrap();
        let query = dto.into_query(UserId::new(1)).unwrap();
        assert_eq!(query.filter, ContractFilter::ById(8));
        assert_eq!(query.page.limit(), 10);
    }
}
