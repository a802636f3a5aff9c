//! File DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::file::FileInfo;

/// DTO for `DELETE /common/remove`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RemoveFileDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
}

/// Location of a stored upload
#[derive(Debug, Clone, Serialize)]
pub struct FileInfoDto {
    pub url: String,
    pub name: String,
}

impl From<FileInfo> for FileInfoDto {
    fn from(info: FileInfo) -> Self {
        Self {
            url: info.url,
            name: info.name,
        }
    }
}
