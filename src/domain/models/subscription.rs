//! Subscription Domain Model
//!
//! Each user has at most one subscription row naming the plan version.

use chrono::{DateTime, Utc};

use super::user::UserId;

/// Plan version assigned to every newly registered user
pub const FREE_VERSION: i16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub uid: UserId,
    pub version: i16,
    pub expired_at: Option<DateTime<Utc>>,
}

impl Subscription {
    /// The default plan for a new account
    #[must_use]
    pub fn free(uid: UserId) -> Self {
        Self {
            uid,
            version: FREE_VERSION,
            expired_at: None,
        }
    }
}
