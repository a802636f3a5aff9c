//! Notice Domain Model
//!
//! Notices are short messages logged for a user (registration, logins).

use chrono::{DateTime, Utc};

use super::page::Page;
use super::user::UserId;

pub const REGISTER_NOTICE: &str =
    "Welcome aboard! Your account is ready and the free plan has been activated.";
pub const LOGIN_NOTICE: &str = "A new login to your account was recorded.";

/// Read state of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum NoticeStatus {
    Unread = 1,
    Read = 2,
}

impl NoticeStatus {
    #[must_use]
    pub fn value(self) -> i16 {
        self as i16
    }

    /// Unknown values are reported as unread
    #[must_use]
    pub fn from_value(value: i16) -> Self {
        if value == Self::Read.value() {
            Self::Read
        } else {
            Self::Unread
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub id: i64,
    pub content: String,
    pub status: NoticeStatus,
    pub creator: UserId,
    pub created_at: DateTime<Utc>,
}

/// Notice list query, newest first
#[derive(Debug, Clone)]
pub struct NoticeQuery {
    pub creator: UserId,
    pub page: Page,
}
