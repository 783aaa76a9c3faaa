//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use crate::domain::entities::CommandDefinition;
use crate::application::errors::ConfigError;
use crate::application::messaging::CommandSettings;

/// Plugin configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub plugin: PluginConfig,
    pub mattermost: MattermostConfig,
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginConfig {
    pub id: String,
    pub trigger: String,
    pub display_name: String,
    pub description: String,
    pub bot_user_id: String,
    pub provider_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MattermostConfig {
    pub enabled: bool,
    pub url: Option<String>,
    pub token: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub user_id: String,
    pub channel_id: String,
    /// Start with a provider session for the console user
    pub connected: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plugin: PluginConfig {
                id: "com.mattermost.msteamsmeetings".to_string(),
                trigger: "mstmeetings".to_string(),
                display_name: "MS Teams Meetings".to_string(),
                description: "Integration with MS Teams Meetings.".to_string(),
                bot_user_id: "mstmeetings-bot".to_string(),
                provider_name: "Microsoft Teams Meetings".to_string(),
            },
            mattermost: MattermostConfig {
                enabled: false,
                url: None,
                token: None,
                timeout_seconds: 30,
            },
            console: ConsoleConfig {
                enabled: true,
                user_id: "console-user".to_string(),
                channel_id: "town-square".to_string(),
                connected: true,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Environment variables override file values
    pub fn apply_env(&mut self) {
        if let Ok(trigger) = std::env::var("MSTMEETINGS_TRIGGER") {
            self.plugin.trigger = trigger;
        }

        if let Ok(bot_user_id) = std::env::var("MSTMEETINGS_BOT_USER_ID") {
            self.plugin.bot_user_id = bot_user_id;
        }

        if let Ok(url) = std::env::var("MM_SITE_URL") {
            self.mattermost.url = Some(url);
        }

        if let Ok(token) = std::env::var("MM_TOKEN") {
            self.mattermost.token = Some(token);
            self.mattermost.enabled = true;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let trigger = &self.plugin.trigger;
        if trigger.is_empty() || trigger.starts_with('/') || trigger.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(format!("trigger '{}'", trigger)));
        }
        if self.plugin.bot_user_id.is_empty() {
            return Err(ConfigError::MissingField("plugin.bot-user-id".to_string()));
        }
        if self.mattermost.enabled {
            if self.mattermost.url.is_none() {
                return Err(ConfigError::MissingField("mattermost.url".to_string()));
            }
            if self.mattermost.token.is_none() {
                return Err(ConfigError::MissingField("mattermost.token".to_string()));
            }
        }
        Ok(())
    }

    /// Registration metadata of the slash command
    pub fn command_definition(&self) -> CommandDefinition {
        CommandDefinition::new(&self.plugin.trigger)
            .with_display_name(&self.plugin.display_name)
            .with_description(&self.plugin.description)
    }

    pub fn command_settings(&self) -> CommandSettings {
        CommandSettings::new(
            self.command_definition(),
            &self.plugin.bot_user_id,
            &self.plugin.provider_name,
        )
    }

    pub fn mattermost_timeout(&self) -> Duration {
        Duration::from_secs(self.mattermost.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("bot-user-id"));

        let config = Config::parse(&yaml).unwrap();
        assert_eq!(config.plugin.trigger, "mstmeetings");
        assert_eq!(config.mattermost.timeout_seconds, 30);
    }

    #[test]
    fn test_rejects_slash_in_trigger() {
        let mut config = Config::default();
        config.plugin.trigger = "/mstmeetings".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_mattermost_requires_url_and_token() {
        let mut config = Config::default();
        config.mattermost.enabled = true;
        config.mattermost.token = Some("t".to_string());
        assert!(matches!(config.validate(), Err(ConfigError::MissingField(f)) if f == "mattermost.url"));
    }

    #[test]
    fn test_settings_from_config() {
        let settings = Config::default().command_settings();
        assert_eq!(settings.command.invocation(), "/mstmeetings");
        assert_eq!(settings.post_type(), "custom_mstmeetings");
        assert_eq!(settings.bot_user_id, "mstmeetings-bot");
        assert_eq!(settings.provider_name, "Microsoft Teams Meetings");
    }
}
