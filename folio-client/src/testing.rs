//! In-memory stubs of the durable store for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::device::DeviceStore;
use crate::errors::{StorageError, StorageResult};

/// In-memory [`DeviceStore`] with the same semantics as the file store
#[derive(Debug, Default)]
pub struct MemoryDeviceStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryDeviceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeviceStore for MemoryDeviceStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// [`DeviceStore`] whose every operation fails, for exercising the
/// degraded paths
#[derive(Debug, Default)]
pub struct FailingDeviceStore;

impl FailingDeviceStore {
    pub fn new() -> Self {
        Self
    }

    fn offline() -> std::io::Error {
        std::io::Error::other("storage offline")
    }
}

#[async_trait]
impl DeviceStore for FailingDeviceStore {
    async fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::ReadFailed(Self::offline()))
    }

    async fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::WriteFailed(Self::offline()))
    }

    async fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::WriteFailed(Self::offline()))
    }
}
