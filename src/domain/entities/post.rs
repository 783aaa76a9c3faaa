use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifecycle marker carried by a meeting post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingStatus {
    /// Asks the creator to confirm before a meeting is started
    DialogWarn,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MeetingStatus::DialogWarn => "DIALOG_WARN",
        }
    }
}

/// Structured properties attached to a meeting post.
///
/// Field names on the wire are the property keys the webapp renderer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingProps {
    #[serde(rename = "type")]
    pub post_type: String,
    #[serde(rename = "meeting_status")]
    pub status: MeetingStatus,
    #[serde(rename = "meeting_personal")]
    pub personal: bool,
    #[serde(rename = "meeting_creator_username")]
    pub creator_name: String,
    #[serde(rename = "meeting_provider")]
    pub provider_name: String,
    pub message: String,
}

/// A message handed to the platform's posting API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub channel_id: String,
    pub message: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub post_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<MeetingProps>,
    #[serde(skip)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn new(user_id: impl Into<String>, channel_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            channel_id: channel_id.into(),
            message: message.into(),
            post_type: String::new(),
            props: None,
            created_at: None,
        }
    }

    /// Custom post carrying meeting properties; the post type mirrors the props type
    pub fn meeting(user_id: impl Into<String>, channel_id: impl Into<String>, props: MeetingProps) -> Self {
        let mut post = Self::new(user_id, channel_id, props.message.clone());
        post.post_type = props.post_type.clone();
        post.props = Some(props);
        post
    }

    /// Mark the post as stored by the platform
    pub fn stored(mut self, id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        self.id = Some(id.into());
        self.created_at = Some(created_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> MeetingProps {
        MeetingProps {
            post_type: "custom_mstmeetings".to_string(),
            status: MeetingStatus::DialogWarn,
            personal: true,
            creator_name: "alice".to_string(),
            provider_name: "Microsoft Teams Meetings".to_string(),
            message: "hello".to_string(),
        }
    }

    #[test]
    fn test_meeting_post_wire_shape() {
        let post = Post::meeting("bot", "chan", props());
        let value = serde_json::to_value(&post).unwrap();

        assert_eq!(value["type"], "custom_mstmeetings");
        assert_eq!(value["message"], "hello");
        assert_eq!(value["props"]["type"], "custom_mstmeetings");
        assert_eq!(value["props"]["meeting_status"], "DIALOG_WARN");
        assert_eq!(value["props"]["meeting_personal"], true);
        assert_eq!(value["props"]["meeting_creator_username"], "alice");
        assert_eq!(value["props"]["meeting_provider"], "Microsoft Teams Meetings");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_plain_post_omits_type_and_props() {
        let value = serde_json::to_value(Post::new("bot", "chan", "hi")).unwrap();
        assert!(value.get("type").is_none());
        assert!(value.get("props").is_none());
        assert_eq!(value["user_id"], "bot");
    }

    #[test]
    fn test_status_name_matches_wire_value() {
        let wire = serde_json::to_value(MeetingStatus::DialogWarn).unwrap();
        assert_eq!(wire, MeetingStatus::DialogWarn.as_str());
    }
}
