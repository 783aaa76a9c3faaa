//! Application layer errors

use thiserror::Error;

pub const TOO_MANY_PARAMETERS_TEXT: &str = "Too many parameters.";
pub const USER_NOT_FOUND_TEXT: &str = "User not found.";

/// Top-level errors of the binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Command is empty. Please try again.")]
    InvalidCommand,

    #[error("{}", TOO_MANY_PARAMETERS_TEXT)]
    TooManyArguments,

    #[error("cannot get user: {0}")]
    UserLookup(#[source] PlatformError),

    #[error("cannot get channel: {0}")]
    ChannelLookup(#[source] PlatformError),

    #[error("cannot get channel members: {0}")]
    MembersLookup(#[source] PlatformError),

    #[error("cannot create post: {0}")]
    PostCreation(#[source] PlatformError),
}

impl CommandError {
    /// Input problems are answered with text and never reported as failures
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CommandError::InvalidCommand | CommandError::TooManyArguments)
    }

    /// Text shown to the invoking user, if any.
    ///
    /// Only the user lookup speaks up among the platform failures; channel,
    /// membership and post failures stay silent.
    pub fn user_message(&self) -> Option<String> {
        match self {
            CommandError::InvalidCommand | CommandError::TooManyArguments => Some(self.to_string()),
            CommandError::UserLookup(_) => Some(USER_NOT_FOUND_TEXT.to_string()),
            CommandError::ChannelLookup(_)
            | CommandError::MembersLookup(_)
            | CommandError::PostCreation(_) => None,
        }
    }
}

/// Chat platform API errors
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Meeting provider errors
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("user {0} is not connected")]
    NotConnected(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_recoverable_text() {
        assert!(CommandError::TooManyArguments.is_recoverable());
        assert!(CommandError::InvalidCommand.is_recoverable());
        assert_eq!(
            CommandError::TooManyArguments.user_message().as_deref(),
            Some("Too many parameters.")
        );
    }

    #[test]
    fn test_lookup_asymmetry() {
        let user = CommandError::UserLookup(PlatformError::NotFound("u".into()));
        let channel = CommandError::ChannelLookup(PlatformError::NotFound("c".into()));

        assert!(!user.is_recoverable());
        assert_eq!(user.user_message().as_deref(), Some("User not found."));
        assert_eq!(channel.user_message(), None);
        assert_eq!(user.to_string(), "cannot get user: Not found: u");
    }

    #[test]
    fn test_provider_error_text() {
        let err = ProviderError::NotConnected("u1".into());
        assert_eq!(err.to_string(), "user u1 is not connected");
    }
}
