//! Contract Domain Model
//!
//! A contract signed with one customer, listing the products it covers.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::page::Page;
use super::user::UserId;
use crate::shared::errors::DomainError;

/// Signing state of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum ContractStatus {
    Signed = 1,
    Unsigned = 2,
}

impl ContractStatus {
    #[must_use]
    pub fn value(self) -> i16 {
        self as i16
    }
}

impl TryFrom<i16> for ContractStatus {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Signed),
            2 => Ok(Self::Unsigned),
            other => Err(DomainError::InvalidValue {
                field: "status",
                reason: format!("unknown contract status {other}"),
            }),
        }
    }
}

/// A product line attached to a contract, stored as JSON with the contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractProduct {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: i16,
    pub unit: String,
    pub code: String,
    pub price: Decimal,
    pub count: i32,
    pub total: Decimal,
}

/// Data required to create or fully update a contract
#[derive(Debug, Clone)]
pub struct ContractData {
    pub name: String,
    pub amount: Decimal,
    pub begin_time: NaiveDate,
    pub over_time: NaiveDate,
    pub remarks: String,
    pub cid: i64,
    pub product_list: Vec<ContractProduct>,
    pub status: ContractStatus,
}

impl ContractData {
    /// Check the business rules a contract must satisfy before it is stored
    ///
    /// # Errors
    ///
    /// Returns `DomainError` when the period is reversed or an amount is negative.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.over_time < self.begin_time {
            return Err(DomainError::InvalidPeriod {
                begin: self.begin_time.to_string(),
                over: self.over_time.to_string(),
            });
        }
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(DomainError::InvalidValue {
                field: "amount",
                reason: "must not be negative".to_string(),
            });
        }
        if let Some(line) = self.product_list.iter().find(|p| p.count < 0) {
            return Err(DomainError::InvalidValue {
                field: "productlist",
                reason: format!("product {} has a negative count", line.id),
            });
        }
        Ok(())
    }
}

/// Contract domain entity
#[derive(Debug, Clone)]
pub struct Contract {
    id: i64,
    name: String,
    amount: Decimal,
    begin_time: NaiveDate,
    over_time: NaiveDate,
    remarks: String,
    cid: i64,
    product_list: Vec<ContractProduct>,
    status: ContractStatus,
    creator: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Contract {
    /// Restore a Contract from persisted data
    #[must_use]
    pub fn restore(
        id: i64,
        data: ContractData,
        creator: UserId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: data.name,
            amount: data.amount,
            begin_time: data.begin_time,
            over_time: data.over_time,
            remarks: data.remarks,
            cid: data.cid,
            product_list: data.product_list,
            status: data.status,
            creator,
            created_at,
            updated_at,
        }
    }

    /// Sum of the line totals of all attached products
    #[must_use]
    pub fn products_total(&self) -> Decimal {
        self.product_list.iter().map(|p| p.total).sum()
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub fn begin_time(&self) -> NaiveDate {
        self.begin_time
    }

    #[must_use]
    pub fn over_time(&self) -> NaiveDate {
        self.over_time
    }

    #[must_use]
    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    #[must_use]
    pub fn cid(&self) -> i64 {
        self.cid
    }

    #[must_use]
    pub fn product_list(&self) -> &[ContractProduct] {
        &self.product_list
    }

    #[must_use]
    pub fn status(&self) -> ContractStatus {
        self.status
    }

    #[must_use]
    pub fn creator(&self) -> UserId {
        self.creator
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// A row of the contract list, joined with the customer name
#[derive(Debug, Clone)]
pub struct ContractListItem {
    pub id: i64,
    pub name: String,
    pub amount: Decimal,
    pub begin_time: NaiveDate,
    pub over_time: NaiveDate,
    pub cname: String,
    pub remarks: String,
    pub status: ContractStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The single optional predicate of a contract list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractFilter {
    All,
    ById(i64),
    ByStatus(ContractStatus),
}

impl ContractFilter {
    /// An id takes precedence over a status; both absent means no filter.
    #[must_use]
    pub fn from_parts(id: Option<i64>, status: Option<ContractStatus>) -> Self {
        match (id, status) {
            (Some(id), _) => Self::ById(id),
            (None, Some(status)) => Self::ByStatus(status),
            (None, None) => Self::All,
        }
    }
}

/// Contract list query, always scoped to one creator
#[derive(Debug, Clone)]
pub struct ContractQuery {
    pub creator: UserId,
    pub filter: ContractFilter,
    pub page: Page,
}
