use std::sync::Arc;
use crate::domain::entities::CommandInvocation;
use crate::domain::traits::{MeetingProvider, Telemetry, EVENT_DISCONNECT};
use crate::application::errors::CommandError;
use crate::application::messaging::{CommandSettings, HandlerResult, Reply};

/// Handles `disconnect`: tears down the caller's provider session
pub struct ConnectionService {
    provider: Arc<dyn MeetingProvider>,
    telemetry: Arc<dyn Telemetry>,
    settings: Arc<CommandSettings>,
}

impl ConnectionService {
    pub fn new(provider: Arc<dyn MeetingProvider>, telemetry: Arc<dyn Telemetry>, settings: Arc<CommandSettings>) -> Self {
        Self { provider, telemetry, settings }
    }

    /// Provider failures are reported to the user and never returned as errors
    pub async fn disconnect(&self, args: &[String], invocation: &CommandInvocation) -> HandlerResult {
        if args.len() > 1 {
            return Err(CommandError::TooManyArguments);
        }

        if let Err(e) = self.provider.disconnect(&invocation.user_id).await {
            tracing::debug!("Disconnect failed for {}: {}", invocation.user_id, e);
            return Ok(Reply::text(format!("Failed to disconnect the user, err={}", e)));
        }

        self.telemetry.track_event(EVENT_DISCONNECT, &invocation.user_id).await;
        Ok(Reply::text(format!(
            "User disconnected from {}.",
            self.settings.command.display_name
        )))
    }
}
