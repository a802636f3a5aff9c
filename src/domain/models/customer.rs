//! Customer Domain Model

use chrono::{DateTime, Utc};

use super::page::Page;
use super::user::UserId;

/// Editable customer fields
#[derive(Debug, Clone, Default)]
pub struct CustomerData {
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
}

/// Customer entity as stored
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: i64,
    pub data: CustomerData,
    pub creator: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimal customer projection used by pickers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerOption {
    pub id: i64,
    pub name: String,
}

/// Customer list query; `name` matches as a case-insensitive substring
#[derive(Debug, Clone)]
pub struct CustomerQuery {
    pub creator: UserId,
    pub name: Option<String>,
    pub page: Page,
}
