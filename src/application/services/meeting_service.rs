use std::sync::Arc;
use crate::domain::entities::{CommandInvocation, MeetingProps, MeetingStatus, Post};
use crate::domain::traits::ChatPlatform;
use crate::application::errors::CommandError;
use crate::application::messaging::{CommandSettings, HandlerResult, Reply};

/// Members fetched when warning about meetings in direct or group channels
pub const MEMBERS_PAGE_SIZE: usize = 100;

/// Handles `start`: posts a meeting confirmation into the invoking channel
pub struct MeetingService {
    platform: Arc<dyn ChatPlatform>,
    settings: Arc<CommandSettings>,
}

impl MeetingService {
    pub fn new(platform: Arc<dyn ChatPlatform>, settings: Arc<CommandSettings>) -> Self {
        Self { platform, settings }
    }

    pub async fn start(&self, args: &[String], invocation: &CommandInvocation) -> HandlerResult {
        if args.len() > 1 {
            return Err(CommandError::TooManyArguments);
        }

        let user = self.platform
            .get_user(&invocation.user_id)
            .await
            .map_err(CommandError::UserLookup)?;

        let channel = self.platform
            .get_channel(&invocation.channel_id)
            .await
            .map_err(CommandError::ChannelLookup)?;

        let mut message = String::new();
        if channel.is_group_or_direct() {
            let members = self.platform
                .get_channel_members(&channel.id, 0, MEMBERS_PAGE_SIZE)
                .await
                .map_err(CommandError::MembersLookup)?;

            tracing::debug!("{} members in channel {}", members.len(), channel.id);
            message.push_str(&format!(
                "You are about to create a meeting in a channel with {} members",
                members.len()
            ));
        }

        let props = MeetingProps {
            post_type: self.settings.post_type(),
            status: MeetingStatus::DialogWarn,
            personal: true,
            creator_name: user.display_name(),
            provider_name: self.settings.provider_name.clone(),
            message,
        };
        let post = Post::meeting(&self.settings.bot_user_id, &invocation.channel_id, props);

        let created = self.platform
            .create_post(post)
            .await
            .map_err(CommandError::PostCreation)?;

        tracing::debug!("Meeting post created in channel {}", invocation.channel_id);
        Ok(Reply::posted(created))
    }
}
