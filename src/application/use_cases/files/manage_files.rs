//! File Use Cases
//!
//! Upload under a generated name and removal by stored name.

use std::sync::Arc;

use crate::domain::gateways::FileStorage;
use crate::domain::models::file::{generate_file_name, validate_file_name, FileInfo};
use crate::shared::errors::UseCaseError;

pub struct UploadFileUseCase {
    storage: Arc<dyn FileStorage>,
}

impl UploadFileUseCase {
    #[must_use]
    pub fn new(storage: Arc<dyn FileStorage>) -> Self {
        Self { storage }
    }

    /// Store the bytes and return where they can be fetched
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the file type is not accepted.
    /// Returns `UseCaseError::FileUploadFailed` if the storage write fails.
    pub async fn execute(&self, original_name: &str, bytes: &[u8]) -> Result<FileInfo, UseCaseError> {
        let name = generate_file_name(original_name)?;
        tracing::info!(original = %original_name, name = %name, size = bytes.len(), "Storing upload");

        self.storage
            .store(&name, bytes)
            .await
            .map_err(UseCaseError::FileUploadFailed)?;

        Ok(FileInfo {
            url: self.storage.url_for(&name),
            name,
        })
    }
}

pub struct RemoveFileUseCase {
    storage: Arc<dyn FileStorage>,
}

impl RemoveFileUseCase {
    #[must_use]
    pub fn new(storage: Arc<dyn FileStorage>) -> Self {
        Self { storage }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` for names that could leave the upload directory.
    /// Returns `UseCaseError::FileRemoveFailed` if the file is missing or cannot be removed.
    pub async fn execute(&self, name: &str) -> Result<(), UseCaseError> {
        validate_file_name(name)?;
        tracing::info!(name = %name, "Removing upload");

        self.storage
            .remove(name)
            .await
            .map_err(UseCaseError::FileRemoveFailed)
    }
}
