use async_trait::async_trait;
use crate::domain::entities::{Channel, ChannelMember, Post, User};
use crate::application::errors::PlatformError;

/// ChatPlatform trait - abstraction over the hosting chat server's API
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Look up a user by id
    async fn get_user(&self, user_id: &str) -> Result<User, PlatformError>;

    /// Look up a channel by id
    async fn get_channel(&self, channel_id: &str) -> Result<Channel, PlatformError>;

    /// Fetch one page of channel members
    async fn get_channel_members(&self, channel_id: &str, page: usize, per_page: usize) -> Result<Vec<ChannelMember>, PlatformError>;

    /// Create a channel-visible post, returning it as stored
    async fn create_post(&self, post: Post) -> Result<Post, PlatformError>;

    /// Show a post to a single user only. Delivery is not confirmed.
    async fn send_ephemeral_post(&self, user_id: &str, post: Post);
}
