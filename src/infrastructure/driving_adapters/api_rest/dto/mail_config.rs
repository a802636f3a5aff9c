//! Mail Configuration DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::mail_config::{MailConfig, MailConfigData};

/// DTO for `POST /mailconfig/save`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MailConfigDto {
    #[validate(length(min = 1, max = 100, message = "stmp must be between 1 and 100 characters"))]
    pub stmp: String,

    #[validate(range(min = 1, max = 65535, message = "port must be between 1 and 65535"))]
    pub port: i32,

    #[validate(length(min = 1, max = 100, message = "auth_code must be between 1 and 100 characters"))]
    pub auth_code: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    pub status: i16,
}

impl From<MailConfigDto> for MailConfigData {
    fn from(dto: MailConfigDto) -> Self {
        Self {
            stmp: dto.stmp.trim().to_string(),
            port: dto.port,
            auth_code: dto.auth_code,
            email: dto.email.trim().to_string(),
            status: dto.status,
        }
    }
}

/// Mail configuration response DTO
#[derive(Debug, Clone, Serialize)]
pub struct MailConfigResponseDto {
    pub id: i64,
    pub stmp: String,
    pub port: i32,
    pub auth_code: String,
    pub email: String,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MailConfig> for MailConfigResponseDto {
    fn from(config: MailConfig) -> Self {
        Self {
            id: config.id,
            stmp: config.data.stmp,
            port: config.data.port,
            auth_code: config.data.auth_code,
            email: config.data.email,
            status: config.data.status,
            created_at: config.created_at,
            updated_at: config.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mail_config_dto_validation() {
        let valid = json!({
            "stmp": "smtp.example.com",
            "port": 465,
            "auth_code": "app-password",
            "email": "sales@example.com",
            "status": 1
        });
        let dto: MailConfigDto = serde_json::from_value(valid.clone()).unwrap();
        assert!(dto.validate().is_ok());

        let mut bad_port = valid.clone();
        bad_port["port"] = json!(70000);
        let dto: MailConfigDto = serde_json::from_value(bad_port).unwrap();
        assert!(dto.validate().is_err());

        let mut bad_email = valid;
        bad_email["email"] = json!("sales");
        let dto: MailConfigDto = serde_json::from_value(bad_email).unwrap();
        assert!(dto.validate().is_err());
    }
}
