//! Durable key-value storage for device identity.
//!
//! The production implementation writes one file per key under the
//! platform config directory. No transactional guarantees beyond
//! single-key atomicity are assumed anywhere above this trait.

use std::path::PathBuf;

use async_trait::async_trait;
use directories::ProjectDirs;

use crate::errors::{StorageError, StorageResult};

/// Storage key under which the device identifier is persisted.
pub const DEVICE_ID_KEY: &str = "device_id";

/// Durable local key-value storage
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// Read a value, `None` if the key was never written.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key; removing an absent key is not an error.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// File-backed store: one file per key in the app config directory
#[derive(Debug, Clone)]
pub struct FileDeviceStore {
    dir: PathBuf,
}

impl FileDeviceStore {
    /// Create a store rooted at the platform config directory.
    pub fn new() -> StorageResult<Self> {
        let proj_dirs =
            ProjectDirs::from("", "folio", "folio-admin").ok_or_else(|| {
                StorageError::InitFailed(
                    "Unable to determine config directory".to_string(),
                )
            })?;

        Ok(Self {
            dir: proj_dirs.config_dir().to_path_buf(),
        })
    }

    /// Create a store rooted at an explicit directory (tests, portable
    /// installs).
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

#[async_trait]
impl DeviceStore for FileDeviceStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(StorageError::ReadFailed)?;
        Ok(Some(content.trim().to_string()))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StorageError::WriteFailed)?;
        }

        tokio::fs::write(&path, value)
            .await
            .map_err(StorageError::WriteFailed)
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(());
        }

        tokio::fs::remove_file(&path)
            .await
            .map_err(StorageError::WriteFailed)
    }
}
