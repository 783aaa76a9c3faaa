//! Console platform for development/testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use crate::domain::entities::{Channel, ChannelMember, ChannelType, Post, User};
use crate::domain::traits::ChatPlatform;
use crate::application::errors::PlatformError;

pub const TOWN_SQUARE: &str = "town-square";
pub const DIRECT_CHANNEL: &str = "direct";
pub const GROUP_CHANNEL: &str = "group";

/// In-memory chat platform that records posts and optionally prints them
pub struct ConsolePlatform {
    users: RwLock<HashMap<String, User>>,
    channels: RwLock<HashMap<String, Channel>>,
    members: RwLock<HashMap<String, Vec<ChannelMember>>>,
    posts: RwLock<Vec<Post>>,
    ephemeral: RwLock<Vec<(String, Post)>>,
    echo: bool,
}

impl ConsolePlatform {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            channels: RwLock::new(HashMap::new()),
            members: RwLock::new(HashMap::new()),
            posts: RwLock::new(Vec::new()),
            ephemeral: RwLock::new(Vec::new()),
            echo: false,
        }
    }

    /// A workspace with one caller, a public channel, a direct and a group channel
    pub fn seeded(user_id: &str, bot_user_id: &str) -> Self {
        Self::new()
            .with_user(User::new(user_id).with_username("console"))
            .with_user(User::new(bot_user_id).with_username("mstmeetings").as_bot())
            .with_user(User::new("guest").with_username("guest"))
            .with_channel(
                Channel::new(TOWN_SQUARE, ChannelType::Open).with_name("Town Square"),
                &[user_id, "guest"],
            )
            .with_channel(Channel::new(DIRECT_CHANNEL, ChannelType::Direct), &[user_id, "guest"])
            .with_channel(
                Channel::new(GROUP_CHANNEL, ChannelType::Group),
                &[user_id, "guest", bot_user_id],
            )
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.get_mut().insert(user.id.clone(), user);
        self
    }

    pub fn with_channel(mut self, channel: Channel, member_ids: &[&str]) -> Self {
        let members = member_ids.iter()
            .map(|user_id| ChannelMember::new(&channel.id, *user_id))
            .collect();
        self.members.get_mut().insert(channel.id.clone(), members);
        self.channels.get_mut().insert(channel.id.clone(), channel);
        self
    }

    /// Channel-visible posts created so far
    pub async fn created_posts(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    /// Ephemeral posts with their recipient
    pub async fn ephemeral_posts(&self) -> Vec<(String, Post)> {
        self.ephemeral.read().await.clone()
    }
}

impl Default for ConsolePlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatPlatform for ConsolePlatform {
    async fn get_user(&self, user_id: &str) -> Result<User, PlatformError> {
        self.users.read().await
            .get(user_id)
            .cloned()
            .ok_or_else(|| PlatformError::NotFound(format!("user {}", user_id)))
    }

    async fn get_channel(&self, channel_id: &str) -> Result<Channel, PlatformError> {
        self.channels.read().await
            .get(channel_id)
            .cloned()
            .ok_or_else(|| PlatformError::NotFound(format!("channel {}", channel_id)))
    }

    async fn get_channel_members(&self, channel_id: &str, page: usize, per_page: usize) -> Result<Vec<ChannelMember>, PlatformError> {
        let members = self.members.read().await;
        let all = members.get(channel_id)
            .ok_or_else(|| PlatformError::NotFound(format!("channel {}", channel_id)))?;

        Ok(all.iter()
            .skip(page.saturating_mul(per_page))
            .take(per_page)
            .cloned()
            .collect())
    }

    async fn create_post(&self, post: Post) -> Result<Post, PlatformError> {
        if !self.channels.read().await.contains_key(&post.channel_id) {
            return Err(PlatformError::NotFound(format!("channel {}", post.channel_id)));
        }

        let post = post.stored(uuid::Uuid::new_v4().to_string(), Utc::now());
        if self.echo {
            println!("[POST #{}] {} {}", post.channel_id, post.post_type, post.message);
            if let Some(props) = &post.props {
                println!("  [{}] by {} via {}", props.status.as_str(), props.creator_name, props.provider_name);
            }
        }

        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn send_ephemeral_post(&self, user_id: &str, post: Post) {
        if self.echo {
            println!("[EPHEMERAL @{}] {}", user_id, post.message);
        }
        self.ephemeral.write().await.push((user_id.to_string(), post));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_channels() {
        let platform = ConsolePlatform::seeded("me", "bot");

        assert!(!platform.get_channel(TOWN_SQUARE).await.unwrap().is_group_or_direct());
        assert!(platform.get_channel(DIRECT_CHANNEL).await.unwrap().is_group_or_direct());
        assert_eq!(platform.get_channel_members(GROUP_CHANNEL, 0, 100).await.unwrap().len(), 3);
        assert!(platform.get_user("bot").await.unwrap().is_bot);
    }

    #[tokio::test]
    async fn test_members_are_paged() {
        let platform = ConsolePlatform::new()
            .with_channel(Channel::new("c", ChannelType::Group), &["a", "b", "c"]);

        let first = platform.get_channel_members("c", 0, 2).await.unwrap();
        let second = platform.get_channel_members("c", 1, 2).await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(second, vec![ChannelMember::new("c", "c")]);
    }

    #[tokio::test]
    async fn test_create_post_assigns_id() {
        let platform = ConsolePlatform::seeded("me", "bot");
        let post = platform.create_post(Post::new("bot", TOWN_SQUARE, "hi")).await.unwrap();

        assert!(post.id.is_some());
        assert!(post.created_at.is_some());
        assert_eq!(platform.created_posts().await, vec![post]);
    }

    #[tokio::test]
    async fn test_create_post_in_unknown_channel_fails() {
        let platform = ConsolePlatform::new();
        let result = platform.create_post(Post::new("bot", "nowhere", "hi")).await;
        assert!(matches!(result, Err(PlatformError::NotFound(_))));
    }
}
