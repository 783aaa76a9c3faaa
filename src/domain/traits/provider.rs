use async_trait::async_trait;
use crate::application::errors::ProviderError;

/// MeetingProvider trait - the external meeting service a user connects to
#[async_trait]
pub trait MeetingProvider: Send + Sync {
    /// Tear down the user's provider session
    async fn disconnect(&self, user_id: &str) -> Result<(), ProviderError>;
}
