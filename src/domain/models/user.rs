//! User Domain Model
//!
//! Represents an account of the CRM. Every other entity is owned by a user.

use chrono::{DateTime, Utc};
use zeroize::Zeroizing;

/// Newtype wrapper for User ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Create a UserId from a raw database id
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying integer id
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl TryFrom<&str> for UserId {
    type Error = std::num::ParseIntError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(value.trim().parse()?))
    }
}

/// Data required to register a new user
#[derive(Debug, Clone)]
pub struct RegisterUserData {
    pub email: String,
    pub password: Zeroizing<String>,
    pub code: String,
}

/// Data required to reset a forgotten password
#[derive(Debug, Clone)]
pub struct ResetPasswordData {
    pub email: String,
    pub password: Zeroizing<String>,
    pub code: String,
}

/// Credentials presented at login
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Zeroizing<String>,
}

/// Data required to delete an account and all of its records
#[derive(Debug, Clone)]
pub struct DeleteAccountData {
    pub uid: UserId,
    pub email: String,
    pub code: String,
}

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: String,
    password_hash: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Restore a User from persisted data
    #[must_use]
    pub fn restore(
        id: UserId,
        email: String,
        password_hash: String,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            name,
            created_at,
            updated_at,
        }
    }

    /// Whether this account is registered under the given email
    #[must_use]
    pub fn owns_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
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

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct Session {
    pub uid: UserId,
    pub token: String,
}

/// Account details shown to the owner, joined with the subscription
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub version: Option<i16>,
    pub expired_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
