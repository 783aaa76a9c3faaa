use async_trait::async_trait;
use crate::application::errors::StorageError;

/// Store trait - key-value storage for provider sessions
#[async_trait]
pub trait Store: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Remove a key, returning whether it was present
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;
}
