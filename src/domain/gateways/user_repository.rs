//! User Repository Gateway
//!
//! Abstract trait defining the contract for account persistence.

use async_trait::async_trait;

use crate::domain::models::user::{User, UserId, UserProfile};
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether an account is registered under the email
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Find a user by id
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Load the account details joined with the subscription
    async fn find_profile(&self, id: UserId) -> Result<Option<UserProfile>, RepositoryError>;

    /// Insert a new user with an already hashed password
    async fn create(&self, email: &str, password_hash: &str) -> Result<User, RepositoryError>;

    /// Replace the password hash; returns false when no such email exists
    async fn update_password(&self, email: &str, password_hash: &str) -> Result<bool, RepositoryError>;

    /// Delete the user and every record it owns in one transaction
    async fn delete_account(&self, id: UserId) -> Result<bool, RepositoryError>;
}
