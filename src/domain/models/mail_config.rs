//! Mail Configuration Domain Model
//!
//! Per-user outbound mail account settings.

use chrono::{DateTime, Utc};

use super::user::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfigData {
    pub stmp: String,
    pub port: i32,
    pub auth_code: String,
    pub email: String,
    pub status: i16,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub id: i64,
    pub data: MailConfigData,
    pub creator: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
