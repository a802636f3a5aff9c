//! Local Filesystem Storage
//!
//! Stores uploads in one directory; they are served read-only under the
//! configured URL prefix.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::gateways::FileStorage;
use crate::shared::errors::GatewayError;

pub struct LocalFileStorage {
    root: PathBuf,
    url_prefix: String,
}

impl LocalFileStorage {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into(),
        }
    }

    /// Create the upload directory if it does not exist
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Storage` if the directory cannot be created.
    pub async fn ensure_root(&self) -> Result<(), GatewayError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| GatewayError::Storage(format!("{}: {e}", self.root.display())))
    }

    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, name: &str, bytes: &[u8]) -> Result<(), GatewayError> {
        let path = self.root.join(name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| GatewayError::Storage(format!("{}: {e}", path.display())))
    }

    async fn remove(&self, name: &str) -> Result<(), GatewayError> {
        let path = self.root.join(name);
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| GatewayError::Storage(format!("{}: {e}", path.display())))
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}{name}", self.url_prefix)
    }
}
