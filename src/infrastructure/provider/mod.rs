//! MS Teams meeting provider

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::traits::{MeetingProvider, Store};
use crate::application::errors::ProviderError;

/// Store key holding a user's provider session
pub fn session_key(user_id: &str) -> String {
    format!("token_{}", user_id)
}

/// Provider whose sessions live in a key-value store
pub struct MsTeamsProvider {
    store: Arc<dyn Store>,
}

impl MsTeamsProvider {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Record a session for a user, replacing any existing one
    pub async fn register_session(&self, user_id: &str, token: &str) -> Result<(), ProviderError> {
        self.store.set(&session_key(user_id), token).await?;
        Ok(())
    }

    pub async fn is_connected(&self, user_id: &str) -> Result<bool, ProviderError> {
        Ok(self.store.get(&session_key(user_id)).await?.is_some())
    }
}

#[async_trait]
impl MeetingProvider for MsTeamsProvider {
    async fn disconnect(&self, user_id: &str) -> Result<(), ProviderError> {
        if !self.store.delete(&session_key(user_id)).await? {
            return Err(ProviderError::NotConnected(user_id.to_string()));
        }
        tracing::info!("Removed MS Teams session for {}", user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStore;

    #[tokio::test]
    async fn test_disconnect_removes_session_once() {
        let provider = MsTeamsProvider::new(Arc::new(MemoryStore::new()));
        provider.register_session("u1", "secret").await.unwrap();
        assert!(provider.is_connected("u1").await.unwrap());

        provider.disconnect("u1").await.unwrap();
        assert!(!provider.is_connected("u1").await.unwrap());

        let err = provider.disconnect("u1").await.unwrap_err();
        assert!(matches!(err, ProviderError::NotConnected(ref id) if id == "u1"));
    }
}
