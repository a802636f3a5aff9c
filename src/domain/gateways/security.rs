//! Security Gateways
//!
//! Password hashing and session tokens.

use crate::domain::models::user::UserId;
use crate::shared::errors::GatewayError;

/// One-way salted password hashing
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh salt
    fn hash(&self, password: &str) -> Result<String, GatewayError>;

    /// Check a plaintext password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> Result<bool, GatewayError>;
}

/// Opaque session tokens bound to a user id
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    fn issue(&self, uid: UserId) -> Result<String, GatewayError>;

    /// Validate a token and return the user it was issued to
    fn verify(&self, token: &str) -> Result<UserId, GatewayError>;
}
