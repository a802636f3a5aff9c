//! Verification Code Stores

mod memory_store;
mod redis_store;

pub use memory_store::InMemoryVerifyCodeStore;
pub use redis_store::RedisVerifyCodeStore;

/// Key under which the code for an email is kept
fn code_key(email: &str) -> String {
    format!("verify_code:{}", email.trim().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_key_normalizes_email() {
        assert_eq!(code_key(" Alice@Example.com"), "verify_code:alice@example.com");
    }
}
