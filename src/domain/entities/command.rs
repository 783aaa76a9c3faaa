use serde::Serialize;

/// A single slash-command invocation as received from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub raw_text: String,
    pub user_id: String,
    pub channel_id: String,
}

impl CommandInvocation {
    pub fn new(raw_text: impl Into<String>, user_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            user_id: user_id.into(),
            channel_id: channel_id.into(),
        }
    }
}

/// Tokenized form of a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Always the first token, e.g. `/mstmeetings`
    pub trigger: String,
    pub action: Option<String>,
    pub args: Vec<String>,
}

/// Sub-commands understood after the trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start,
    Disconnect,
    Help,
    Unknown(String),
}

impl Action {
    /// Exact, case-sensitive match on the action token
    pub fn parse(token: &str) -> Self {
        match token {
            "start" => Action::Start,
            "disconnect" => Action::Disconnect,
            "help" => Action::Help,
            other => Action::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Start => "start",
            Action::Disconnect => "disconnect",
            Action::Help => "help",
            Action::Unknown(s) => s,
        }
    }
}

/// Registration metadata of the slash command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDefinition {
    pub trigger: String,
    pub display_name: String,
    pub description: String,
    pub auto_complete: bool,
    pub auto_complete_desc: String,
    pub auto_complete_hint: String,
}

impl CommandDefinition {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            display_name: String::new(),
            description: String::new(),
            auto_complete: true,
            auto_complete_desc: "Available commands: start, disconnect".to_string(),
            auto_complete_hint: "[command]".to_string(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// The first token a user types, slash included
    pub fn invocation(&self) -> String {
        format!("/{}", self.trigger)
    }

    pub fn matches(&self, token: &str) -> bool {
        token.strip_prefix('/') == Some(self.trigger.as_str())
    }
}

/// Acknowledgment returned to the host; responses travel as ephemeral posts instead
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parse_is_exact() {
        assert_eq!(Action::parse("start"), Action::Start);
        assert_eq!(Action::parse("disconnect"), Action::Disconnect);
        assert_eq!(Action::parse("help"), Action::Help);
        assert_eq!(Action::parse("Start"), Action::Unknown("Start".to_string()));
        assert_eq!(Action::parse("stop").as_str(), "stop");
    }

    #[test]
    fn test_definition_matches_slash_trigger_only() {
        let def = CommandDefinition::new("mstmeetings");
        assert!(def.matches("/mstmeetings"));
        assert!(!def.matches("mstmeetings"));
        assert!(!def.matches("/mstmeetingsx"));
        assert_eq!(def.invocation(), "/mstmeetings");
    }

    #[test]
    fn test_definition_autocomplete_defaults() {
        let def = CommandDefinition::new("mstmeetings")
            .with_display_name("MS Teams Meetings")
            .with_description("Integration with MS Teams Meetings.");
        assert!(def.auto_complete);
        assert_eq!(def.auto_complete_desc, "Available commands: start, disconnect");
        assert_eq!(def.auto_complete_hint, "[command]");
    }
}
