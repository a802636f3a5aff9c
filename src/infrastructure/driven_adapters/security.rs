//! Security Adapters
//!
//! Argon2 password hashing and HS256 session tokens.

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;
use password_hash::rand_core::OsRng;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::gateways::{PasswordHasher, TokenService};
use crate::domain::models::user::UserId;
use crate::shared::errors::GatewayError;

/// Argon2id with the crate defaults and a random salt per hash
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, GatewayError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| GatewayError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, GatewayError> {
        let parsed = PasswordHash::new(hash).map_err(|e| GatewayError::Hashing(e.to_string()))?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(GatewayError::Hashing(e.to_string())),
        }
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// HS256 tokens carrying the user id as subject
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in_secs: i64,
}

impl JwtTokenService {
    #[must_use]
    pub fn new(secret: &str, expires_in_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in_secs,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, uid: UserId) -> Result<String, GatewayError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: uid.to_string(),
            iat: now,
            exp: now + self.expires_in_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| GatewayError::Token(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<UserId, GatewayError> {
        // Explicit algorithm to prevent algorithm confusion attacks
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 60;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| GatewayError::Token(e.to_string()))?;

        let uid = UserId::try_from(data.claims.sub.as_str())
            .map_err(|_| GatewayError::Token("subject is not a user id".to_string()))?;
        if uid.value() <= 0 {
            return Err(GatewayError::Token("subject is not a user id".to_string()));
        }
        Ok(uid)
    }
}
