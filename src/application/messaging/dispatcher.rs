//! Command dispatcher - Routes a command line to its action handler

use std::sync::Arc;
use crate::domain::entities::{Action, CommandDefinition, CommandInvocation, CommandResponse, Post};
use crate::domain::traits::{ChatPlatform, MeetingProvider, Telemetry};
use crate::application::services::{help_text, ConnectionService, MeetingService};
use super::parser;
use super::response::{CommandOutcome, HandlerResult, Reply};

/// Immutable settings injected into the dispatcher
#[derive(Debug, Clone)]
pub struct CommandSettings {
    pub command: CommandDefinition,
    /// Author of every post the plugin creates
    pub bot_user_id: String,
    pub provider_name: String,
}

impl CommandSettings {
    pub fn new(command: CommandDefinition, bot_user_id: impl Into<String>, provider_name: impl Into<String>) -> Self {
        Self {
            command,
            bot_user_id: bot_user_id.into(),
            provider_name: provider_name.into(),
        }
    }

    /// Custom post type of meeting posts
    pub fn post_type(&self) -> String {
        format!("custom_{}", self.command.trigger)
    }
}

/// Command dispatcher - parses, routes and answers slash commands
pub struct CommandDispatcher {
    settings: Arc<CommandSettings>,
    platform: Arc<dyn ChatPlatform>,
    meetings: MeetingService,
    connections: ConnectionService,
}

impl CommandDispatcher {
    pub fn new(
        settings: CommandSettings,
        platform: Arc<dyn ChatPlatform>,
        provider: Arc<dyn MeetingProvider>,
        telemetry: Arc<dyn Telemetry>,
    ) -> Self {
        let settings = Arc::new(settings);
        Self {
            meetings: MeetingService::new(platform.clone(), settings.clone()),
            connections: ConnectionService::new(provider, telemetry, settings.clone()),
            platform,
            settings,
        }
    }

    pub fn definition(&self) -> &CommandDefinition {
        &self.settings.command
    }

    pub fn help_text(&self) -> String {
        help_text(&self.settings.command)
    }

    /// Execute a command and return its text, side effect and error
    pub async fn execute(&self, invocation: &CommandInvocation) -> CommandOutcome {
        CommandOutcome::from(self.route(invocation).await)
    }

    async fn route(&self, invocation: &CommandInvocation) -> HandlerResult {
        let parsed = parser::parse(&invocation.raw_text)?;
        let command = &self.settings.command;

        if !command.matches(&parsed.trigger) {
            return Ok(Reply::text(format!(
                "Command '{}' is not {}. Please try again.",
                parsed.trigger,
                command.invocation()
            )));
        }

        let Some(action) = parsed.action.as_deref() else {
            return Ok(Reply::text(self.help_text()));
        };

        tracing::debug!("[{}] action {} from {}", invocation.channel_id, action, invocation.user_id);

        match Action::parse(action) {
            Action::Start => self.meetings.start(&parsed.args, invocation).await,
            Action::Disconnect => self.connections.disconnect(&parsed.args, invocation).await,
            Action::Help => Ok(Reply::text(self.help_text())),
            Action::Unknown(action) => Ok(Reply::text(format!(
                "Unknown action `{}`.\n{}",
                action,
                self.help_text()
            ))),
        }
    }

    /// Host entry point. Never fails: errors are logged and any response text
    /// is shown to the caller as an ephemeral post.
    pub async fn execute_command(&self, invocation: &CommandInvocation) -> CommandResponse {
        let outcome = self.execute(invocation).await;

        if let Some(err) = &outcome.error {
            tracing::warn!(error = %err, "failed to execute command");
        }

        if !outcome.text.is_empty() {
            let post = Post::new(&self.settings.bot_user_id, &invocation.channel_id, outcome.text);
            self.platform.send_ephemeral_post(&invocation.user_id, post).await;
        }

        CommandResponse::default()
    }
}
