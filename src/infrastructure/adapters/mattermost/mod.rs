//! Mattermost REST adapter

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::entities::{Channel, ChannelMember, ChannelType, Post, User};
use crate::domain::traits::ChatPlatform;
use crate::application::errors::PlatformError;

/// REST API prefix
const API_PATH: &str = "api/v4";

#[derive(Debug, Clone, Deserialize)]
struct MmUser {
    id: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    is_bot: bool,
}

impl From<MmUser> for User {
    fn from(u: MmUser) -> Self {
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        User {
            id: u.id,
            username: non_empty(u.username),
            first_name: non_empty(u.first_name),
            last_name: non_empty(u.last_name),
            is_bot: u.is_bot,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct MmChannel {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    channel_type: ChannelType,
}

impl From<MmChannel> for Channel {
    fn from(c: MmChannel) -> Self {
        Channel {
            id: c.id,
            name: c.name,
            channel_type: c.channel_type,
        }
    }
}

/// Error body returned by the server on failure
#[derive(Debug, Deserialize)]
struct MmError {
    message: String,
}

/// Body of `POST /posts/ephemeral`
#[derive(Debug, Serialize)]
struct EphemeralRequest<'a> {
    user_id: &'a str,
    post: &'a Post,
}

/// Mattermost server reached over its REST API with a bot access token
pub struct MattermostPlatform {
    base_url: String,
    token: String,
    client: Client,
}

impl MattermostPlatform {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>, timeout: Duration) -> Result<Self, PlatformError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        })
    }

    /// Get the API URL for a path
    fn api_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, API_PATH, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T, PlatformError> {
        let response = self.client
            .get(self.api_url(path))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        Self::read_json(response, what).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B, what: &str) -> Result<T, PlatformError> {
        let response = self.client
            .post(self.api_url(path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        Self::read_json(response, what).await
    }

    async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, PlatformError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PlatformError::NotFound(what.to_string()));
        }
        if !status.is_success() {
            let message = response
                .json::<MmError>()
                .await
                .map(|e| e.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(PlatformError::Api { status: status.as_u16(), message });
        }

        response
            .json()
            .await
            .map_err(|e| PlatformError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ChatPlatform for MattermostPlatform {
    async fn get_user(&self, user_id: &str) -> Result<User, PlatformError> {
        let user: MmUser = self.get_json(&format!("users/{}", user_id), &format!("user {}", user_id)).await?;
        Ok(user.into())
    }

    async fn get_channel(&self, channel_id: &str) -> Result<Channel, PlatformError> {
        let channel: MmChannel = self.get_json(&format!("channels/{}", channel_id), &format!("channel {}", channel_id)).await?;
        Ok(channel.into())
    }

    async fn get_channel_members(&self, channel_id: &str, page: usize, per_page: usize) -> Result<Vec<ChannelMember>, PlatformError> {
        let path = format!("channels/{}/members?page={}&per_page={}", channel_id, page, per_page);
        self.get_json(&path, &format!("channel {}", channel_id)).await
    }

    async fn create_post(&self, post: Post) -> Result<Post, PlatformError> {
        #[derive(Deserialize)]
        struct Created {
            id: String,
            #[serde(default)]
            create_at: i64,
        }

        let created: Created = self.post_json("posts", &post, &format!("channel {}", post.channel_id)).await?;
        let created_at = Utc.timestamp_millis_opt(created.create_at)
            .single()
            .unwrap_or_else(Utc::now);

        Ok(post.stored(created.id, created_at))
    }

    async fn send_ephemeral_post(&self, user_id: &str, post: Post) {
        let request = EphemeralRequest { user_id, post: &post };
        let result: Result<serde_json::Value, _> = self.post_json("posts/ephemeral", &request, "ephemeral post").await;
        if let Err(e) = result {
            tracing::warn!("Failed to send ephemeral post to {}: {}", user_id, e);
        }
    }
}
